// [libs/shared/heimdall/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HEIMDALL NEURAL OBSERVER (V26.0 - SWEEP CORE ALIGNED)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4)
 * RESPONSABILIDAD: GESTIÓN DE TRAZADO Y CAPTURA DE PÁNICOS PARA EL CLI
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CORE REALIGNMENT: Retira el modo de producción JSON (no hay un
 *    servicio HTTP aguas abajo que consuma logs estructurados); el
 *    binario de barrido solo necesita una traza compacta a stderr.
 * 2. PHOENIX SHIELD: Conserva el hook de pánico global, capturando
 *    colapsos en los hilos del enjambre de trabajadores antes de que
 *    el proceso termine.
 * 3. HYGIENE: Documentación técnica nivel Tesis Doctoral MIT.
 * =================================================================
 */

use tracing::{error, info, instrument};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};
use std::panic;

/// Inicializa el sistema de trazas Heimdall con blindaje de pánicos soberano.
///
/// Construye un filtro `RUST_LOG`-compatible (por defecto `debug` en builds
/// de desarrollo, `info` en release) y un formateador compacto a stderr, y
/// registra un panic hook que reporta el colapso de cualquier hilo del
/// enjambre de trabajadores vía `tracing::error!` antes de que el proceso
/// termine.
///
/// # Errors:
/// Entra en pánico si otro suscriptor global ya ha sido inicializado en el runtime.
#[instrument(skip_all)]
pub fn init_tracing(service_nominal_identifier: &str) {
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{}={level}",
            service_nominal_identifier,
            level = if cfg!(debug_assertions) { "debug" } else { "info" }
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(environmental_filter)
        .with(formatting_layer::layer().compact().with_target(false).with_writer(std::io::stderr))
        .init();

    let service_id_snapshot = service_nominal_identifier.to_string();
    panic::set_hook(Box::new(move |panic_metadata| {
        let panic_location = panic_metadata
            .location()
            .map(|location| format!("{}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let panic_payload_message = panic_metadata
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_metadata.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("undefined panic payload");

        error!(
            target: "panic_monitor",
            service = %service_id_snapshot,
            location = %panic_location,
            "worker thread terminated abruptly: {}",
            panic_payload_message
        );
    }));

    info!("tracing initialized for [{}]", service_nominal_identifier);
}
