use storefront::{Storefront, content, shell};
use storefront_media::UploadClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> storefront::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = storefront_config::load()?;
    let site = content::load_site_content()?;
    let orders = content::load_orders()?;
    let uploads = UploadClient::new(&config.upload)?;

    let (app, lightbox_events) = Storefront::new(config, site, orders);
    shell::run(app, lightbox_events, uploads).await
}
