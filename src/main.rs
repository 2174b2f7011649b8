use std::io::{self, BufWriter};

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{debug, info};

use parking_billing::config::environment::EnvironmentConfig;
use parking_billing::controllers::CommandController;
use parking_billing::state::SystemState;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().map_err(|e| anyhow::anyhow!("Configuración inválida: {}", e))?;
    let level = config
        .tracing_level()
        .map_err(|e| anyhow::anyhow!("Configuración inválida: {}", e))?;

    // Configurar logging (stderr: stdout queda para los resultados)
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    info!("🅿️ Parking Billing - intérprete de comandos");
    info!("============================================");
    info!("🌍 Entorno: {}", config.environment);
    info!("📦 Máximo de parques: {}", config.max_lots);
    info!("🖨️ Formato de salida: {:?}", config.output_format);
    if config.is_development() {
        debug!("🔧 Modo desarrollo: nivel de log {}", level);
    }

    let mut state = SystemState::new(config.max_lots);
    let controller = CommandController::new(config.output_format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    controller.run(&mut state, stdin.lock(), &mut out)?;

    info!("✅ Fin de la sesión ({} parques registrados)", state.lots.len());
    Ok(())
}
