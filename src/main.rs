use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::create_pool;
use vehicle_rental::services::catalog::{CatalogHandle, CatalogWatcher};
use vehicle_rental::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental - API Storefront");
    info!("==================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    sqlx::migrate!().run(&pool).await?;

    // Catálogo en memoria actualizado vía LISTEN/NOTIFY
    let catalog = CatalogHandle::new();
    CatalogWatcher::spawn(pool.clone(), catalog.clone());

    let state = AppState::new(pool, config.clone(), catalog);
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚙 Endpoints - Vehicle:");
    info!("   GET  /api/vehicle - Listar vehículos disponibles");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("📋 Endpoints - Booking:");
    info!("   POST /api/booking - Crear solicitud de booking");
    info!("   GET  /api/booking - Listar bookings del usuario");
    info!("   GET  /api/booking/:id - Obtener booking");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Perfil del usuario actual");
    info!("🎉 Endpoints - Offer:");
    info!("   GET  /api/offer - Listar ofertas activas");
    info!("✉️  Endpoints - Contact:");
    info!("   POST /api/contact - Enviar mensaje de contacto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Señal de apagado recibida");
}
