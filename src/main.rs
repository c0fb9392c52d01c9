// Server entry point

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Starting FX Macro Index API ...");
    fx_macro_index::api::start_server().await
}
