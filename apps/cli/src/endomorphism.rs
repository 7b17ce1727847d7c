// [apps/cli/src/endomorphism.rs]
/*!
 * =================================================================
 * APARATO: GLV ENDOMORPHISM EXPANSION (SHELL)
 * RESPONSABILIDAD: SEIS COMPAÑEROS POR PUNTO CANDIDATO BAJO EL AUTOMORFISMO φ
 *
 * secp256k1 admite el endomorfismo φ(x, y) = (βx, y), con β ∈ Fp una raíz
 * cúbica de la unidad, que corresponde a la multiplicación escalar por
 * λ ∈ Fn (también raíz cúbica de la unidad): φ(kG) = (λk)G. Combinando la
 * simetría especular de la curva (x, y) ~ (x, -y) con las dos aplicaciones
 * de φ se obtienen, a partir de un único punto calculado, cinco compañeros
 * adicionales sin ninguna multiplicación de punto extra:
 *
 *   (x, y)          k
 *   (x, -y)        -k
 *   (βx, y)        λk
 *   (βx, -y)      -λk
 *   (β²x, y)       λ²k
 *   (β²x, -y)     -λ²k
 *
 * Las constantes β, β², λ, λ² están declaradas en la fuente original de
 * este programa pero nunca se conectan a ninguna bandera de línea de
 * comandos; aquí se cablean a `-endo` con las transformadas de escalar
 * completas para que una coincidencia en cualquiera de los seis
 * compañeros recupere la llave privada original, no solo el punto.
 * =================================================================
 */

use prospector_core_math::prelude::{FieldElement, Scalar};

/// β mod p: raíz cúbica de la unidad en el cuerpo, usada para φ(x, y) = (βx, y).
pub const BETA: FieldElement = FieldElement::from_limbs([
    0xc1396c28719501ee,
    0x9cf0497512f58995,
    0x6e64479eac3434e9,
    0x7ae96a2b657c0710,
]);

/// β² mod p.
pub const BETA_SQUARED: FieldElement = FieldElement::from_limbs([
    0x3ec693d68e6afa40,
    0x630fb68aed0a766a,
    0x919bb86153cbcb16,
    0x851695d49a83f8ef,
]);

/// λ mod n: el multiplicador escalar correspondiente a φ, tal que φ(kG) = (λk)G.
pub const LAMBDA: Scalar = Scalar::from_limbs_unchecked([
    0xdf02967c1b23bd72,
    0x122e22ea20816678,
    0xa5261c028812645a,
    0x5363ad4cc05c30e0,
]);

/// λ² mod n.
pub const LAMBDA_SQUARED: Scalar = Scalar::from_limbs_unchecked([
    0xe0cfc810b51283ce,
    0xa880b9fc8ec739c2,
    0x5ad9e3fd77ed9ba4,
    0xac9c52b33fa3cf1f,
]);

/// Un compañero del punto bajo la simetría especular y el endomorfismo GLV,
/// junto con la transformada de escalar que lo recupera como llave privada.
pub struct Companion {
    /// Coordenada X afín del punto compañero (Big-Endian).
    pub x_be: [u8; 32],
    /// Coordenada Y afín del punto compañero (Big-Endian).
    pub y_be: [u8; 32],
    /// Transforma el escalar original `k` en el escalar que genera este compañero.
    pub recover_scalar: fn(&Scalar) -> Scalar,
}

fn negate_y(y_be: &[u8; 32]) -> [u8; 32] {
    FieldElement::from_bytes_be(y_be).negate_modular().internal_words_to_be_bytes()
}

fn apply_beta(x_be: &[u8; 32], beta: &FieldElement) -> [u8; 32] {
    FieldElement::from_bytes_be(x_be).multiply_modular(beta).internal_words_to_be_bytes()
}

/// Expande un punto candidato `(x, y)` en sus cinco compañeros GLV, cada uno
/// con la transformada de escalar que reconstruye la llave privada original
/// si ese compañero resulta ser el que coincide con el filtro.
#[must_use]
pub fn expand(x_be: &[u8; 32], y_be: &[u8; 32]) -> [Companion; 5] {
    let neg_y = negate_y(y_be);
    let beta_x = apply_beta(x_be, &BETA);
    let beta2_x = apply_beta(x_be, &BETA_SQUARED);

    [
        Companion { x_be: *x_be, y_be: neg_y, recover_scalar: |k| k.neg_mod_n() },
        Companion { x_be: beta_x, y_be: *y_be, recover_scalar: |k| k.mul_mod_n(&LAMBDA) },
        Companion { x_be: beta_x, y_be: neg_y, recover_scalar: |k| k.mul_mod_n(&LAMBDA).neg_mod_n() },
        Companion { x_be: beta2_x, y_be: *y_be, recover_scalar: |k| k.mul_mod_n(&LAMBDA_SQUARED) },
        Companion { x_be: beta2_x, y_be: neg_y, recover_scalar: |k| k.mul_mod_n(&LAMBDA_SQUARED).neg_mod_n() },
    ]
}
