use signup_api::{app::App, config::get_or_init_config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        signup_api::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        signup_api::init_dbg_tracing();
    }

    let config = get_or_init_config();
    let app = App::build_from_config(config).await?;

    signup_api::app::serve(app).await?;

    Ok(())
}
