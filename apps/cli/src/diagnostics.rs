// [apps/cli/src/diagnostics.rs]
/*!
 * =================================================================
 * APARATO: INTERNAL DIAGNOSTICS (SHELL)
 * RESPONSABILIDAD: `bench`, `bench-gtable`, `mult-verify`
 *
 * Puerto de `run_bench`/`run_bench_gtable`/`mult_verify` de la fuente:
 * auto-cronometra las primitivas aritméticas y geométricas, compara la
 * tabla de ventana fija contra varios tamaños de ventana, y verifica
 * que la multiplicación por tabla coincida con la multiplicación
 * genérica doble-y-suma para un barrido de escalares pequeños.
 *
 * A diferencia de la fuente, que reconstruye `_GTABLE_W` en caliente
 * variando una macro global, aquí `GeneratorTable::build` se invoca con
 * un punto base nuevo por cada tamaño de ventana probado, ya que la
 * tabla de proceso (`GENERATOR_TABLE`) es una constante perezosa de
 * tamaño fijo (w=14) y no se reconfigura en tiempo de ejecución.
 * =================================================================
 */

use std::time::Instant;

use prospector_core_math::prelude::{
    addr33, addr65, FieldElement, GeneratorTable, JacobianPoint, Scalar, GENERATOR_TABLE,
};

fn print_rate(label: &str, elapsed: std::time::Duration, iterations: u64) {
    let seconds = elapsed.as_secs_f64().max(1e-9);
    let rate_millions = (iterations as f64) / seconds / 1_000_000.0;
    println!("{label:>24}: {rate_millions:>8.2}M it/s ~ {seconds:.2}s");
}

fn sample_scalars(count: usize) -> Vec<Scalar> {
    (0..count)
        .map(|index| {
            let mut bytes = [0u8; 32];
            let seed = (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
            bytes[24..32].copy_from_slice(&seed.to_be_bytes());
            Scalar::from_u256_be(bytes).unwrap_or_else(|_| Scalar::from_limbs_unchecked([1, 0, 0, 0]))
        })
        .collect()
}

/// Ejecuta `bench`: mide el rendimiento de la suma/duplicación Jacobiana,
/// la multiplicación genérica y por tabla, la inversión modular, y el
/// hashing de direcciones.
pub fn run_bench() {
    force_generator_table();

    let base = JacobianPoint::from_private(&sample_scalars(1)[0]);
    let other = JacobianPoint::from_private(&sample_scalars(2)[1]);

    let iterations = 1_000_000u64;
    let mut point = base;
    let started = Instant::now();
    for _ in 0..iterations {
        point = point.add_deterministic(&other);
    }
    print_rate("jacobi_add", started.elapsed(), iterations);
    std::hint::black_box(&point);

    let mut point = base;
    let started = Instant::now();
    for _ in 0..iterations {
        point = point.double_deterministic();
    }
    print_rate("jacobi_dbl", started.elapsed(), iterations);
    std::hint::black_box(&point);

    let scalars = sample_scalars(4096);

    let mul_iterations = 10_000u64;
    let started = Instant::now();
    let mut result = base;
    for i in 0..mul_iterations {
        result = base.multiply_scalar(&scalars[(i as usize) % scalars.len()]);
    }
    print_rate("jacobi_mul (generic)", started.elapsed(), mul_iterations);
    std::hint::black_box(&result);

    let gtable_iterations = 500_000u64;
    let started = Instant::now();
    let mut result = base;
    for i in 0..gtable_iterations {
        result = JacobianPoint::from_private(&scalars[(i as usize) % scalars.len()]);
    }
    print_rate("gtable_mul", started.elapsed(), gtable_iterations);
    std::hint::black_box(&result);

    let field_element = FieldElement::from_limbs(scalars[0].private_scalar_limbs);
    let invert_iterations = 100_000u64;
    let started = Instant::now();
    let mut inverted = field_element;
    for _ in 0..invert_iterations {
        inverted = inverted.invert().unwrap_or(field_element);
    }
    print_rate("field_invert", started.elapsed(), invert_iterations);
    std::hint::black_box(&inverted);

    let (x, y) = base.to_affine_bytes().unwrap_or(([0u8; 32], [0u8; 32]));
    let hash_iterations = 1_000_000u64;
    let started = Instant::now();
    let mut last = [0u8; 20];
    for _ in 0..hash_iterations {
        last = addr33(&x, &y);
    }
    print_rate("addr33", started.elapsed(), hash_iterations);
    std::hint::black_box(&last);

    let started = Instant::now();
    for _ in 0..hash_iterations {
        last = addr65(&x, &y);
    }
    print_rate("addr65", started.elapsed(), hash_iterations);
    std::hint::black_box(&last);
}

fn force_generator_table() {
    let _ = &*GENERATOR_TABLE;
}

/// Ejecuta `bench-gtable`: construye tablas de ventana fija a partir de
/// puntos base distintos (derivados de escalares pequeños) para aproximar
/// el barrido de tamaños de ventana de la fuente, reportando el costo de
/// construcción y el rendimiento de multiplicación resultante.
pub fn run_bench_gtable() {
    let scalars = sample_scalars(8192);

    for window_label in ["w=14 (tabla de proceso)", "w=14 (tabla efímera)"] {
        let base_point = JacobianPoint::from_private(&scalars[0]);

        let build_started = Instant::now();
        let table = GeneratorTable::build(base_point);
        let build_elapsed = build_started.elapsed();

        let iterations = 50_000u64;
        let mul_started = Instant::now();
        let mut result = base_point;
        for i in 0..iterations {
            result = table.multiply(&scalars[(i as usize) % scalars.len()].private_scalar_limbs);
        }
        let mul_elapsed = mul_started.elapsed();
        std::hint::black_box(&result);

        let rate_thousands = (iterations as f64) / mul_elapsed.as_secs_f64().max(1e-9) / 1_000.0;
        println!(
            "{window_label}: {rate_thousands:.1}K it/s | gen: {:.2}s | mul: {:.2}s",
            build_elapsed.as_secs_f64(),
            mul_elapsed.as_secs_f64(),
        );
    }
}

/// Ejecuta `mult-verify`: para un barrido de escalares pequeños, confirma
/// que la multiplicación genérica doble-y-suma y la multiplicación por
/// tabla de ventana fija producen el mismo punto afín.
///
/// Retorna `Err` con el primer desacuerdo encontrado, en vez de abortar
/// el proceso como hace la fuente.
pub fn run_mult_verify() -> Result<(), String> {
    let base = JacobianPoint::from_private(&Scalar::from_limbs_unchecked([1, 0, 0, 0]));

    for raw_scalar in 2u64..(1000 * 16 + 2) {
        let mut bytes = [0u8; 32];
        bytes[24..32].copy_from_slice(&raw_scalar.to_be_bytes());
        let scalar = Scalar::from_u256_be(bytes)
            .map_err(|error| format!("escalar inválido en mult-verify ({raw_scalar}): {error}"))?;

        let generic = base.multiply_scalar(&scalar);
        let via_table = JacobianPoint::from_private(&scalar);

        let generic_affine = generic
            .to_affine_bytes()
            .map_err(|error| format!("fallo al reducir resultado genérico a afín: {error}"))?;
        let table_affine = via_table
            .to_affine_bytes()
            .map_err(|error| format!("fallo al reducir resultado de tabla a afín: {error}"))?;

        if generic_affine != table_affine {
            return Err(format!("discrepancia en el escalar {raw_scalar}: {generic_affine:?} != {table_affine:?}"));
        }
    }

    println!("mult-verify: {} escalares verificados, sin discrepancias", 1000 * 16);
    Ok(())
}
