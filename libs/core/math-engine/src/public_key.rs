// [libs/core/math-engine/src/public_key.rs]
/*!
 * =================================================================
 * APARATO: PUBLIC KEY ENGINE (V172.0 - ZENITH GOLD MASTER)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: GESTIÓN DE PUNTOS AFINES Y SERIALIZACIÓN SEC1
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SOVEREIGN GEOMETRY: El punto se deriva con la tabla de ventana fija de
 *    `generator_table` en vez de delegar en una librería externa de curva.
 * 2. SEC1 NATIVO: Serialización y decompresión (vía raíz cuadrada modular)
 *    implementadas directamente sobre `FieldElement`/`JacobianPoint`.
 * =================================================================
 */

use crate::errors::MathError;
use crate::field::FieldElement;
use crate::point::JacobianPoint;
use crate::private_key::SafePrivateKey;
use crate::scalar::Scalar;

/// Representa una Clave Pública en la curva secp256k1.
///
/// Es un punto afín $(x, y)$ que satisface la ecuación de Weierstrass
/// $y^2 = x^3 + 7 \pmod p$. Actúa como el identificador soberano para la
/// derivación de direcciones Bitcoin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafePublicKey {
    point: JacobianPoint,
}

impl SafePublicKey {
    /**
     * Deriva una clave pública a partir de una clave privada ($Q = k \cdot G$).
     *
     * # Mathematical Proof
     * Realiza la multiplicación de base fija del generador $G$ por el escalar
     * secreto $k$ mediante la tabla de ventana de 14 bits.
     */
    #[inline(always)]
    #[must_use]
    pub fn from_private(private_key_handle: &SafePrivateKey) -> Self {
        Self {
            point: JacobianPoint::from_private(private_key_handle.as_scalar()),
        }
    }

    /// Construye una clave pública directamente desde un punto Jacobiano ya calculado.
    #[inline(always)]
    #[must_use]
    pub fn from_point(point: JacobianPoint) -> Self {
        Self { point }
    }

    /**
     * Reconstruye una clave pública a partir de una ráfaga de bytes en formato SEC1
     * (33 bytes comprimidos con prefijo 0x02/0x03, o 65 bytes sin comprimir con 0x04).
     *
     * # Errors
     * Retorna `MathError::InvalidKeyFormat` si el prefijo es desconocido, la
     * longitud no coincide, o (en el caso comprimido) `x` no es un residuo
     * cuadrático módulo p.
     */
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        match bytes.first() {
            Some(0x04) if bytes.len() == 65 => {
                let x = FieldElement::from_bytes_be(bytes[1..33].try_into().unwrap());
                let y = FieldElement::from_bytes_be(bytes[33..65].try_into().unwrap());
                Ok(Self { point: JacobianPoint::from_affine(x.internal_words, y.internal_words) })
            }
            Some(prefix @ (0x02 | 0x03)) if bytes.len() == 33 => {
                let x = FieldElement::from_bytes_be(bytes[1..33].try_into().unwrap());
                let y = Self::decompress_y(&x, *prefix == 0x03)?;
                Ok(Self { point: JacobianPoint::from_affine(x.internal_words, y.internal_words) })
            }
            _ => Err(MathError::InvalidKeyFormat(
                "prefijo SEC1 desconocido o longitud incorrecta".into(),
            )),
        }
    }

    /// Recupera `y` a partir de `x` y la paridad deseada: `y^2 = x^3 + 7 mod p`.
    fn decompress_y(x: &FieldElement, odd: bool) -> Result<FieldElement, MathError> {
        let seven = FieldElement::from_u64(7);
        let rhs = x.square_modular().multiply_modular(x).add_modular(&seven);
        let candidate = rhs.sqrt_modular();
        if candidate.square_modular() != rhs {
            return Err(MathError::InvalidKeyFormat(
                "x no es un residuo cuadrático: punto fuera de curva".into(),
            ));
        }
        Ok(if candidate.is_odd() == odd { candidate } else { candidate.negate_modular() })
    }

    /**
     * Incrementa la clave pública sumándole el punto generador ($Q' = Q + G$),
     * sin conocer el escalar original. Usado por el motor secuencial mod mode.
     */
    #[inline(always)]
    #[must_use]
    pub fn increment(&self) -> Self {
        let one = Scalar::from_limbs_unchecked([1, 0, 0, 0]);
        self.add_scalar(&one)
    }

    /**
     * Ajusta la clave pública sumándole un escalar arbitrario ($Q' = Q + s \cdot G$).
     * Usado por la recuperación de escalar del endomorfismo y por saltos de rango.
     */
    #[inline(always)]
    #[must_use]
    pub fn add_scalar(&self, scalar: &Scalar) -> Self {
        let offset_point = JacobianPoint::from_private(scalar);
        Self { point: self.point.add_deterministic(&offset_point) }
    }

    /**
     * Serializa la clave pública al formato binario estándar SEC1.
     *
     * `use_compression = true` produce 33 bytes (prefijo + X); `false` produce
     * 65 bytes (`0x04` + X + Y).
     */
    #[must_use]
    pub fn to_bytes(&self, use_compression: bool) -> Vec<u8> {
        let (x_bytes, y_bytes) = self
            .point
            .to_affine_bytes()
            .expect("una clave pública válida nunca reside en el infinito");

        if use_compression {
            let mut output = Vec::with_capacity(33);
            let y_is_odd = (y_bytes[31] & 1) == 1;
            output.push(if y_is_odd { 0x03 } else { 0x02 });
            output.extend_from_slice(&x_bytes);
            output
        } else {
            let mut output = Vec::with_capacity(65);
            output.push(0x04);
            output.extend_from_slice(&x_bytes);
            output.extend_from_slice(&y_bytes);
            output
        }
    }

    /// Acceso de sólo lectura al punto Jacobiano subyacente, para el motor de barrido.
    #[inline(always)]
    #[must_use]
    pub fn as_point(&self) -> &JacobianPoint {
        &self.point
    }
}
