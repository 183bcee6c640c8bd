use dockgen_core::mode::{GOPKG_LOCK, GOPKG_TOML};
use dockgen_core::{BuildConfig, DependencyMode, ImageConfig};

/// Generates a two-stage Dockerfile: a Go build stage and a minimal runtime.
pub struct DockerfileGenerator<'a> {
    config: &'a BuildConfig,
    images: &'a ImageConfig,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(config: &'a BuildConfig, images: &'a ImageConfig) -> Self {
        Self { config, images }
    }

    pub fn render(&self) -> String {
        let mode = self.config.dependency_mode();
        tracing::debug!(%mode, "rendering Dockerfile");

        format!(
            r#"# Build the binary in docker container
FROM {build_image} AS build
WORKDIR /go/src/{package_path}
{dependencies}
COPY . ./

RUN CGO_ENABLED=0 GOOS=linux go build -o /go/bin/{binary} -ldflags="-w -s" -v {main_package}

FROM {runtime_image} AS final
RUN apk --no-cache add ca-certificates
COPY --from=build /go/bin/{binary} /bin/{binary}
"#,
            build_image = self.images.build,
            runtime_image = self.images.runtime,
            package_path = self.config.import_path,
            dependencies = dependency_steps(mode),
            binary = self.config.binary_name,
            main_package = self.config.entry_package,
        )
    }
}

/// Steps that populate dependencies before the full source copy.
pub fn dependency_steps(mode: DependencyMode) -> String {
    match mode {
        DependencyMode::LegacyLock => format!(
            "RUN go get github.com/golang/dep/cmd/dep\n\
             COPY {GOPKG_TOML} {GOPKG_LOCK} ./\n\
             RUN dep ensure -v -vendor-only\n"
        ),
        DependencyMode::ModuleManifest => "RUN go mod vendor\n".to_owned(),
        DependencyMode::None => "RUN go get -v ./...\n".to_owned(),
    }
}
