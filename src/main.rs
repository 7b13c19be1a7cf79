#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use portfolio::content::Portfolio;
    use tracing::{error, info};

    portfolio::logging::init_logger();

    match Portfolio::embedded() {
        Ok(portfolio) => {
            info!(
                name = %portfolio.profile.name,
                projects = portfolio.projects.len(),
                skills = portfolio.skills.len(),
                certificates = portfolio.certificates.len(),
                "content is valid"
            );
            info!("the site itself is frontend-only; run `trunk serve` or `trunk build --release`");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "content is invalid");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = portfolio::frontend::run() {
        tracing::error!(error = %err, "failed to start portfolio");
    }
}
