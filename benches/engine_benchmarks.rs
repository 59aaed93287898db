// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{thread_rng, RngCore};
use sha2::Sha512;

use curve25519_engine::constants;
use curve25519_engine::scalar::Scalar;

static BATCH_SIZES: [usize; 5] = [1, 2, 4, 8, 16];

fn random_scalar<R: RngCore>(rng: &mut R) -> Scalar {
    let mut wide = [0u8; 64];
    rng.fill_bytes(&mut wide);
    Scalar::from_bytes_mod_order_wide(&wide)
}

/// A full-width scalar that is the same on every run.
fn dense_scalar() -> Scalar {
    Scalar::hash_from_bytes::<Sha512>(b"curve25519-engine bench scalar")
}

mod edwards_benches {
    use super::*;

    use curve25519_engine::edwards::EdwardsPoint;

    fn compress(c: &mut Criterion) {
        let B = &constants::ED25519_BASEPOINT_POINT;
        c.bench_function("edwards/compress", move |b| b.iter(|| B.compress()));
    }

    fn decompress(c: &mut Criterion) {
        let B_comp = &constants::ED25519_BASEPOINT_COMPRESSED;
        c.bench_function("edwards/decompress", move |b| {
            b.iter(|| B_comp.decompress())
        });
    }

    fn batch_compress(c: &mut Criterion) {
        let mut group = c.benchmark_group("edwards/compress_batch");
        let mut rng = thread_rng();
        for batch_size in BATCH_SIZES {
            let points: Vec<EdwardsPoint> = (0..batch_size)
                .map(|_| EdwardsPoint::mul_base(&random_scalar(&mut rng)))
                .collect();
            group.bench_function(format!("n={batch_size}"), |b| {
                b.iter(|| EdwardsPoint::compress_batch(&points))
            });
        }
        group.finish();
    }

    fn consttime_fixed_base_scalar_mul(c: &mut Criterion) {
        let s = dense_scalar();
        c.bench_function("edwards/mul_base", move |b| {
            b.iter(|| EdwardsPoint::mul_base(&s))
        });
    }

    fn consttime_variable_base_scalar_mul(c: &mut Criterion) {
        let B = &constants::ED25519_BASEPOINT_POINT;
        let s = dense_scalar();
        c.bench_function("edwards/mul", move |b| {
            b.iter(|| B * s)
        });
    }

    fn vartime_double_base_scalar_mul(c: &mut Criterion) {
        c.bench_function("edwards/vartime_double_scalar_mul_basepoint", |bench| {
            let mut rng = thread_rng();
            let A = EdwardsPoint::mul_base(&random_scalar(&mut rng));
            bench.iter_batched(
                || (random_scalar(&mut rng), random_scalar(&mut rng)),
                |(a, b)| EdwardsPoint::vartime_double_scalar_mul_basepoint(&a, &A, &b),
                BatchSize::SmallInput,
            );
        });
    }

    fn torsion_check(c: &mut Criterion) {
        let B = &constants::ED25519_BASEPOINT_POINT;
        c.bench_function("edwards/is_torsion_free", move |b| {
            b.iter(|| B.is_torsion_free())
        });
    }

    criterion_group! {
        name = edwards_benches;
        config = Criterion::default();
        targets =
        compress,
        decompress,
        batch_compress,
        consttime_fixed_base_scalar_mul,
        consttime_variable_base_scalar_mul,
        vartime_double_base_scalar_mul,
        torsion_check,
    }
}

mod montgomery_benches {
    use super::*;

    use curve25519_engine::montgomery::MontgomeryPoint;

    fn montgomery_ladder(c: &mut Criterion) {
        let B = constants::X25519_BASEPOINT;
        let s = dense_scalar();
        c.bench_function("montgomery/mul", move |b| b.iter(|| B * s));
    }

    fn consttime_fixed_base_scalar_mul(c: &mut Criterion) {
        let s = dense_scalar();
        c.bench_function("montgomery/mul_base", move |b| {
            b.iter(|| MontgomeryPoint::mul_base(&s))
        });
    }

    criterion_group! {
        name = montgomery_benches;
        config = Criterion::default();
        targets =
        montgomery_ladder,
        consttime_fixed_base_scalar_mul,
    }
}

mod scalar_benches {
    use super::*;

    fn scalar_arith(c: &mut Criterion) {
        let mut rng = thread_rng();

        c.bench_function("scalar/invert", |b| {
            let s = dense_scalar();
            b.iter(|| s.invert());
        });
        c.bench_function("scalar/add", |b| {
            b.iter_batched(
                || (random_scalar(&mut rng), random_scalar(&mut rng)),
                |(x, y)| x + y,
                BatchSize::SmallInput,
            );
        });
        c.bench_function("scalar/mul", |b| {
            b.iter_batched(
                || (random_scalar(&mut rng), random_scalar(&mut rng)),
                |(x, y)| x * y,
                BatchSize::SmallInput,
            );
        });
        c.bench_function("scalar/hash_from_bytes", |b| {
            b.iter(|| Scalar::hash_from_bytes::<Sha512>(b"benchmark input"))
        });
    }

    fn batch_scalar_inversion(c: &mut Criterion) {
        let mut group = c.benchmark_group("scalar/batch_invert");
        let mut rng = thread_rng();
        for batch_size in BATCH_SIZES {
            let scalars: Vec<Scalar> = (0..batch_size).map(|_| random_scalar(&mut rng)).collect();
            group.bench_function(format!("n={batch_size}"), |b| {
                b.iter_batched(
                    || scalars.clone(),
                    |mut s| Scalar::batch_invert(&mut s),
                    BatchSize::SmallInput,
                );
            });
        }
        group.finish();
    }

    criterion_group! {
        name = scalar_benches;
        config = Criterion::default();
        targets =
        scalar_arith,
        batch_scalar_inversion,
    }
}

mod ed25519_benches {
    use super::*;

    use curve25519_engine::ed25519::{SigningKey, VerifyOptions};

    fn sign(c: &mut Criterion) {
        let signing_key = SigningKey::from_bytes(&[7u8; 32]);
        let msg: &[u8] = b"";

        c.bench_function("ed25519/sign", move |b| b.iter(|| signing_key.sign(msg)));
    }

    fn verify(c: &mut Criterion) {
        let signing_key = SigningKey::from_bytes(&[7u8; 32]);
        let verifying_key = signing_key.verifying_key();
        let msg: &[u8] = b"";
        let sig = signing_key.sign(msg);

        c.bench_function("ed25519/verify", move |b| {
            b.iter(|| verifying_key.verify(msg, &sig))
        });
        c.bench_function("ed25519/verify_zip215", move |b| {
            b.iter(|| verifying_key.verify_with_options(msg, &sig, &VerifyOptions::ZIP_215))
        });
    }

    fn key_generation(c: &mut Criterion) {
        let mut rng = thread_rng();

        c.bench_function("ed25519/from_seed", move |b| {
            b.iter_batched(
                || {
                    let mut seed = [0u8; 32];
                    rng.fill_bytes(&mut seed);
                    seed
                },
                |seed| SigningKey::from_bytes(&seed),
                BatchSize::SmallInput,
            )
        });
    }

    criterion_group! {
        name = ed25519_benches;
        config = Criterion::default();
        targets =
        sign,
        verify,
        key_generation,
    }
}

mod x25519_benches {
    use super::*;

    use curve25519_engine::x25519::{x25519, PublicKey, StaticSecret, X25519_BASEPOINT_BYTES};

    fn diffie_hellman(c: &mut Criterion) {
        let bob_secret = StaticSecret::from([0x5au8; 32]);
        let bob_public = PublicKey::from(&bob_secret);

        c.bench_function("x25519/diffie_hellman", move |b| {
            b.iter_batched(
                || StaticSecret::from([0x42u8; 32]),
                |s| s.diffie_hellman(&bob_public),
                BatchSize::SmallInput,
            )
        });
    }

    fn public_key(c: &mut Criterion) {
        c.bench_function("x25519/public_key_table", |b| {
            b.iter(|| PublicKey::from(&StaticSecret::from([0x42u8; 32])))
        });
        c.bench_function("x25519/public_key_ladder", |b| {
            b.iter(|| x25519([0x42u8; 32], X25519_BASEPOINT_BYTES))
        });
    }

    criterion_group! {
        name = x25519_benches;
        config = Criterion::default();
        targets =
        diffie_hellman,
        public_key,
    }
}

criterion_main!(
    edwards_benches::edwards_benches,
    montgomery_benches::montgomery_benches,
    scalar_benches::scalar_benches,
    ed25519_benches::ed25519_benches,
    x25519_benches::x25519_benches,
);
