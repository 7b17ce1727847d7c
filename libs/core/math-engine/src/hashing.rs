// [libs/core/math-engine/src/hashing.rs]
/*!
 * =================================================================
 * APARATO: BITCOIN DIGEST PIPELINE (V172.0 - ZENITH GOLD MASTER)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: DERIVACIÓN HASH160 DESDE PUNTOS AFINES SECP256K1
 *
 * # Mathematical Proof (Bitcoin address hash)
 * HASH160(Q) = RIPEMD160(SHA256(encode(Q))), donde `encode` es la
 * codificación SEC1 del punto afín Q = (x, y): un byte de prefijo seguido
 * de x (comprimida) o de x‖y (sin comprimir).
 *
 * Esta capa delega los calendarios de ronda de SHA-256 y RIPEMD-160 en las
 * primitivas verificadas de RustCrypto (`sha2`, `ripemd`); lo que construye
 * explícitamente es la codificación del punto, que es el contrato
 * observable que deben reproducir bit a bit las pruebas de vector dorado.
 * =================================================================
 */

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// HASH160 genérico: RIPEMD160(SHA256(bytes)). Usado sobre cualquier payload;
/// `addr33`/`addr65` son sus únicos llamadores internos, cada uno aportando
/// la codificación SEC1 que le corresponde.
#[must_use]
pub fn hash160(bytes: &[u8]) -> [u8; 20] {
    let sha_digest = Sha256::digest(bytes);
    let ripemd_digest = Ripemd160::digest(sha_digest);
    let mut output = [0u8; 20];
    output.copy_from_slice(&ripemd_digest);
    output
}

/// Codifica un punto afín en formato SEC1 comprimido: prefijo 0x02/0x03 según
/// la paridad de `y`, seguido de `x` en big-endian (33 bytes).
fn encode_compressed(x_be: &[u8; 32], y_be: &[u8; 32]) -> [u8; 33] {
    let mut message = [0u8; 33];
    message[0] = if (y_be[31] & 1) == 1 { 0x03 } else { 0x02 };
    message[1..33].copy_from_slice(x_be);
    message
}

/// Codifica un punto afín en formato SEC1 sin comprimir: 0x04 ‖ x ‖ y (65 bytes).
fn encode_uncompressed(x_be: &[u8; 32], y_be: &[u8; 32]) -> [u8; 65] {
    let mut message = [0u8; 65];
    message[0] = 0x04;
    message[1..33].copy_from_slice(x_be);
    message[33..65].copy_from_slice(y_be);
    message
}

/// HASH160 de la codificación comprimida de un punto afín.
#[must_use]
pub fn addr33(x_be: &[u8; 32], y_be: &[u8; 32]) -> [u8; 20] {
    hash160(&encode_compressed(x_be, y_be))
}

/// HASH160 de la codificación sin comprimir de un punto afín.
#[must_use]
pub fn addr65(x_be: &[u8; 32], y_be: &[u8; 32]) -> [u8; 20] {
    hash160(&encode_uncompressed(x_be, y_be))
}

/// Variante en lote de `addr33` sobre un grupo de puntos afines ya reducidos.
///
/// El motor de barrido reduce un grupo completo (`GROUP`) de puntos
/// Jacobianos a afín con una sola inversión por lote y entrega aquí las
/// coordenadas resultantes; esta función procesa el lote en un bucle
/// ajustado. El nombre y la forma de la firma se conservan para que un
/// backend SIMD (AVX2/NEON) pueda sustituir el cuerpo sin tocar los
/// llamadores del motor.
#[must_use]
pub fn addr33_batch(points: &[([u8; 32], [u8; 32])]) -> Vec<[u8; 20]> {
    points.iter().map(|(x, y)| addr33(x, y)).collect()
}

/// Variante en lote de `addr65`. Ver `addr33_batch`.
#[must_use]
pub fn addr65_batch(points: &[([u8; 32], [u8; 32])]) -> Vec<[u8; 20]> {
    points.iter().map(|(x, y)| addr65(x, y)).collect()
}
