// [libs/core/math-engine/src/private_key.rs]
/*!
 * =================================================================
 * APARATO: PRIVATE KEY MANAGER (V172.0 - ZENITH GOLD MASTER)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: GESTIÓN SEGURA DE ESCALARES SECRETOS
 *
 * Envuelve `Scalar` (aritmética modulo n propia del motor) en vez de
 * delegar en una librería de curva elíptica externa: la validación de
 * rango (0 < k < n) y la generación aleatoria ya no cruzan un límite
 * de FFI, quedan dentro del mismo espacio de direcciones que el resto
 * del motor geométrico.
 * =================================================================
 */

use crate::errors::MathError;
use crate::scalar::Scalar;
use rand::RngCore;

/// Wrapper seguro para una clave privada de curva elíptica secp256k1.
/// Garantiza: 0 < k < n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafePrivateKey {
    inner: Scalar,
}

impl SafePrivateKey {
    /// Genera una nueva clave privada utilizando el CSPRNG del sistema operativo.
    ///
    /// Reintenta (rechazo por muestreo) si los 32 bytes aleatorios caen en el
    /// rango `[n, 2^256)` o colapsan a cero tras la reducción, igual que
    /// `Scalar::from_u256_be`.
    #[must_use]
    pub fn new_random() -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let mut candidate_bytes = [0u8; 32];
            rng.fill_bytes(&mut candidate_bytes);
            if let Ok(scalar) = Scalar::from_u256_be(candidate_bytes) {
                return Self { inner: scalar };
            }
        }
    }

    /// Intenta construir una clave privada a partir de 32 bytes big-endian.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        if bytes.len() != 32 {
            return Err(MathError::InvalidKeyFormat(format!(
                "se esperaban 32 bytes, se recibieron {}",
                bytes.len()
            )));
        }
        let mut fixed_bytes = [0u8; 32];
        fixed_bytes.copy_from_slice(bytes);
        let scalar = Scalar::from_u256_be(fixed_bytes)?;
        Ok(Self { inner: scalar })
    }

    /// Serializa la clave a 32 bytes big-endian.
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_u256_be()
    }

    /// Referencia al escalar interno, usado por el motor geométrico para k*G.
    #[inline(always)]
    #[must_use]
    pub fn as_scalar(&self) -> &Scalar {
        &self.inner
    }
}
