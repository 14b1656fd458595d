use criterion::{criterion_group, criterion_main, Criterion};
use lineal::{Matrix, Vector};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned inputs so no decomposition path bails early
// ---------------------------------------------------------------------------

fn diag_dominant(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i * 3 + j) as f64 * 0.37).sin() + if i == j { n as f64 } else { 0.0 }
    })
}

fn tall(m: usize, n: usize) -> Matrix<f64> {
    Matrix::from_fn(m, n, |i, j| {
        if i == j {
            (10 * (j + 1)) as f64
        } else {
            0.5 * ((i * 2 + j * 5) as f64 * 0.19).cos()
        }
    })
}

// Spread diagonal keeps the eigenvalue gaps wide, so the QR iteration
// converges well inside its budget.
fn separated_symmetric(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        if i == j {
            (10 * (i + 1)) as f64
        } else {
            0.5 * ((i + j) as f64 * 0.11).sin()
        }
    })
}

fn spd(n: usize) -> Matrix<f64> {
    let m = diag_dominant(n);
    &m * &m.transpose()
}

// ---------------------------------------------------------------------------
// Matrix products
// ---------------------------------------------------------------------------

fn matmul_50(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_50x50");
    let a = Matrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
    let m = Matrix::from_fn(50, 50, |i, j| (i + j + 1) as f64);

    g.bench_function("sequential", |b| {
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });
    #[cfg(feature = "rayon")]
    g.bench_function("parallel", |b| {
        b.iter(|| std::hint::black_box(&a).par_mul(std::hint::black_box(&m)))
    });

    g.finish();
}

fn matmul_200(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_200x200");
    let a = Matrix::from_fn(200, 200, |i, j| (i * 200 + j + 1) as f64);
    let m = Matrix::from_fn(200, 200, |i, j| (i + j + 1) as f64);

    g.bench_function("sequential", |b| {
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });
    #[cfg(feature = "rayon")]
    g.bench_function("parallel", |b| {
        b.iter(|| std::hint::black_box(&a).par_mul(std::hint::black_box(&m)))
    });

    g.finish();
}

fn matvec_200(c: &mut Criterion) {
    let mut g = c.benchmark_group("matvec_200x200");
    let a = Matrix::from_fn(200, 200, |i, j| (i + j + 1) as f64);
    let v = Vector::from_vec((0..200).map(|i| i as f64).collect());

    g.bench_function("sequential", |b| {
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&v))
    });
    #[cfg(feature = "rayon")]
    g.bench_function("parallel", |b| {
        b.iter(|| std::hint::black_box(&a).par_mul_vec(std::hint::black_box(&v)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// LU decomposition
// ---------------------------------------------------------------------------

fn lu_50(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu_50x50");
    let a = diag_dominant(50);

    g.bench_function("sequential", |b| b.iter(|| std::hint::black_box(&a).lu()));
    #[cfg(feature = "rayon")]
    g.bench_function("parallel", |b| {
        b.iter(|| std::hint::black_box(&a).lu_parallel())
    });

    g.finish();
}

fn lu_150(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu_150x150");
    let a = diag_dominant(150);

    g.bench_function("sequential", |b| b.iter(|| std::hint::black_box(&a).lu()));
    #[cfg(feature = "rayon")]
    g.bench_function("parallel", |b| {
        b.iter(|| std::hint::black_box(&a).lu_parallel())
    });

    g.finish();
}

fn lu_solve_50(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu_solve_50");
    let a = diag_dominant(50);
    let b_vec = Vector::from_vec((0..50).map(|i| (i + 1) as f64).collect());

    g.bench_function("solve", |b| {
        b.iter(|| std::hint::black_box(&a).solve(std::hint::black_box(&b_vec)))
    });
    g.bench_function("inverse", |b| {
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// QR decomposition
// ---------------------------------------------------------------------------

fn qr_100x50(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr_100x50");
    let a = tall(100, 50);

    g.bench_function("sequential", |b| b.iter(|| std::hint::black_box(&a).qr()));
    #[cfg(feature = "rayon")]
    g.bench_function("parallel", |b| {
        b.iter(|| std::hint::black_box(&a).qr_parallel())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Symmetric factorizations
// ---------------------------------------------------------------------------

fn cholesky_100(c: &mut Criterion) {
    let mut g = c.benchmark_group("cholesky_100x100");
    let a = spd(100);

    g.bench_function("cholesky", |b| {
        b.iter(|| std::hint::black_box(&a).cholesky())
    });
    g.bench_function("ldlt", |b| b.iter(|| std::hint::black_box(&a).ldlt()));

    g.finish();
}

// ---------------------------------------------------------------------------
// Iterative layer
// ---------------------------------------------------------------------------

fn eigen_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("eigen_8x8");
    let a = separated_symmetric(8);

    g.bench_function("eigenvalues", |b| {
        b.iter(|| std::hint::black_box(&a).eigenvalues(1000, 1e-10))
    });
    g.bench_function("eigenvectors", |b| {
        b.iter(|| std::hint::black_box(&a).eigenvectors(1000, 1e-10))
    });

    g.finish();
}

fn svd_16x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("svd_16x8");
    let a = tall(16, 8);

    g.bench_function("svd", |b| b.iter(|| std::hint::black_box(&a).svd()));

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    matmul_50,
    matmul_200,
    matvec_200,
    lu_50,
    lu_150,
    lu_solve_50,
    qr_100x50,
    cholesky_100,
    eigen_8x8,
    svd_16x8,
);
criterion_main!(benches);
