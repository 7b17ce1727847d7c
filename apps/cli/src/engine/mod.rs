// [apps/cli/src/engine/mod.rs]
/*!
 * =================================================================
 * APARATO: SEARCH ENGINES (SHELL)
 * RESPONSABILIDAD: LOS TRES MOTORES DE BARRIDO (add, mul, rnd)
 * =================================================================
 */

/// Motor de barrido de rango contiguo (`add`), basado en el avance
/// batch add-stride sobre la tabla de puntos precomputados.
pub mod sweep;

/// Motor de lista de escalares (`mul`), con cola productor/consumidor.
pub mod mul;

/// Motor de sub-rango aleatorio (`rnd`), construido sobre `sweep`.
pub mod rnd;

use prospector_core_math::prelude::{FieldElement, JacobianPoint, MathError};

/// Un punto afín representado como par de elementos de campo, usado por la
/// tabla de puntos precomputados del barrido por lotes.
#[derive(Clone, Copy)]
pub struct AffinePoint {
    /// Coordenada X afín.
    pub x: FieldElement,
    /// Coordenada Y afín.
    pub y: FieldElement,
}

/// Reduce un lote de puntos Jacobianos a afín con una única inversión
/// amortizada sobre todas las coordenadas Z (truco de Montgomery).
///
/// Equivalente a `ec_jacobi_grprdc` de la fuente: usado por el motor `mul`
/// para reducir un lote completo de multiplicaciones independientes sin
/// pagar una inversión modular por punto.
pub fn batch_reduce_to_affine(points: &[JacobianPoint]) -> Result<Vec<AffinePoint>, MathError> {
    let z_values: Vec<FieldElement> = points.iter().map(|point| point.z).collect();
    let mut z_inverses = vec![FieldElement::from_u64(0); points.len()];
    let mut scratch = vec![FieldElement::from_u64(0); points.len()];

    FieldElement::batch_invert_into(&z_values, &mut z_inverses, &mut scratch)?;

    Ok(points
        .iter()
        .zip(z_inverses.iter())
        .map(|(point, z_inverse)| {
            let z_inverse_squared = z_inverse.square_modular();
            let z_inverse_cubed = z_inverse_squared.multiply_modular(z_inverse);
            AffinePoint {
                x: point.x.multiply_modular(&z_inverse_squared),
                y: point.y.multiply_modular(&z_inverse_cubed),
            }
        })
        .collect())
}
