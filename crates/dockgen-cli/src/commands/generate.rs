use dockgen_build::DockerfileGenerator;
use dockgen_core::{BuildConfig, DockgenConfig};

/// Detect the project in the working directory and write its Dockerfile.
pub fn generate(binary_name: Option<&str>) -> anyhow::Result<()> {
    let project_dir = dockgen_core::current_dir()?;
    tracing::debug!(dir = %project_dir.display(), ?binary_name, "generating Dockerfile");
    let config = DockgenConfig::load(&project_dir)?;
    let build = BuildConfig::detect(&project_dir, binary_name)?;

    let dockerfile = DockerfileGenerator::new(&build, &config.image).render();
    let path = dockgen_build::write_dockerfile(&project_dir, &dockerfile)
        .inspect_err(|e| tracing::error!(error = %e, "Dockerfile left unchanged"))?;

    println!("Wrote {} ({} mode)", path.display(), build.dependency_mode());
    Ok(())
}
