use lineal::linalg::{backward_substitution, forward_substitution, LinalgError};
use lineal::{Matrix, Vector};

const TOL: f64 = 1e-6;

fn assert_matrix_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.nrows(), b.nrows(), "{}: row count", msg);
    assert_eq!(a.ncols(), b.ncols(), "{}: col count", msg);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                (a[(i, j)] - b[(i, j)]).abs() < tol,
                "{}: ({}, {}): {} vs {}",
                msg,
                i,
                j,
                a[(i, j)],
                b[(i, j)]
            );
        }
    }
}

// ── LU ───────────────────────────────────────────────────────────────

#[test]
fn lu_factors_reconstruct_and_are_triangular() {
    let a = Matrix::from_rows(&[[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    let lu = a.lu().unwrap();

    assert_matrix_near(&(lu.l() * lu.u()), &a, TOL, "L*U");
    for i in 0..3 {
        assert_eq!(lu.l()[(i, i)], 1.0, "L unit diagonal");
        for j in (i + 1)..3 {
            assert_eq!(lu.l()[(i, j)], 0.0, "L strict upper");
            assert_eq!(lu.u()[(j, i)], 0.0, "U strict lower");
        }
    }
}

#[test]
fn determinant_classic_3x3() {
    let a = Matrix::from_rows(&[[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    assert!((a.det().unwrap() - (-306.0)).abs() < TOL);
}

#[test]
fn solve_round_trip() {
    let a = Matrix::from_rows(&[
        [2.0_f64, 1.0, -1.0],
        [-3.0, -1.0, 2.0],
        [-2.0, 1.0, 2.0],
    ]);
    let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
    let x = a.solve(&b).unwrap();

    let back = &a * &x;
    for i in 0..3 {
        assert!((back[i] - b[i]).abs() < TOL, "row {}", i);
    }
}

#[test]
fn inverse_round_trip() {
    let a = Matrix::from_rows(&[[4.0_f64, 7.0, 2.0], [2.0, 6.0, 1.0], [1.0, 1.0, 3.0]]);
    let inv = a.inverse().unwrap();
    assert_matrix_near(&(&a * &inv), &Matrix::eye(3), TOL, "A*A^-1");
    assert_matrix_near(&(&inv * &a), &Matrix::eye(3), TOL, "A^-1*A");
}

#[test]
fn degenerate_first_column_rejected() {
    let a = Matrix::from_rows(&[[0.0_f64, 1.0], [0.0, 2.0]]);
    assert_eq!(a.lu().unwrap_err(), LinalgError::SingularOrDegenerate);
    assert_eq!(a.det().unwrap_err(), LinalgError::SingularOrDegenerate);
    assert_eq!(a.qr().unwrap_err(), LinalgError::SingularOrDegenerate);
}

// ── QR ───────────────────────────────────────────────────────────────

#[test]
fn qr_classic_3x3() {
    let a = Matrix::from_rows(&[
        [12.0_f64, -51.0, 4.0],
        [6.0, 167.0, -68.0],
        [-4.0, 24.0, -41.0],
    ]);
    let qr = a.qr().unwrap();

    assert_matrix_near(&(qr.q() * qr.r()), &a, TOL, "Q*R");
    assert_matrix_near(&(&qr.q().transpose() * qr.q()), &Matrix::eye(3), 1e-10, "QtQ");
    for i in 0..3 {
        assert!(qr.r()[(i, i)] > 0.0, "R diagonal positive");
        for j in 0..i {
            assert_eq!(qr.r()[(i, j)], 0.0, "R strict lower");
        }
    }
}

// ── Cholesky / LDLT ──────────────────────────────────────────────────

#[test]
fn cholesky_reconstructs_spd() {
    let a = Matrix::from_rows(&[
        [4.0_f64, 2.0, 1.0],
        [2.0, 10.0, 3.5],
        [1.0, 3.5, 4.5],
    ]);
    let chol = a.cholesky().unwrap();
    assert_matrix_near(&(chol.l() * &chol.lt()), &a, TOL, "L*Lt");
}

#[test]
fn cholesky_rejects_asymmetric_and_indefinite() {
    let asym = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
    assert_eq!(asym.cholesky().unwrap_err(), LinalgError::NotSymmetric);

    let indefinite = Matrix::from_rows(&[[1.0_f64, 5.0], [5.0, 1.0]]);
    assert_eq!(
        indefinite.cholesky().unwrap_err(),
        LinalgError::NotPositiveDefinite
    );
}

#[test]
fn ldlt_reconstructs_with_unit_diagonal() {
    let a = Matrix::from_rows(&[
        [4.0_f64, 2.0, 1.0],
        [2.0, 10.0, 3.5],
        [1.0, 3.5, 4.5],
    ]);
    let ldlt = a.ldlt().unwrap();

    for i in 0..3 {
        assert_eq!(ldlt.l()[(i, i)], 1.0, "L unit diagonal");
    }
    let back = &(ldlt.l() * &ldlt.d_matrix()) * &ldlt.l().transpose();
    assert_matrix_near(&back, &a, TOL, "L*D*Lt");
}

#[test]
fn ldlt_accepts_indefinite() {
    let a = Matrix::from_rows(&[[1.0_f64, 5.0], [5.0, 1.0]]);
    let ldlt = a.ldlt().unwrap();
    assert!(ldlt.d()[1] < 0.0);
    let back = &(ldlt.l() * &ldlt.d_matrix()) * &ldlt.l().transpose();
    assert_matrix_near(&back, &a, TOL, "L*D*Lt");
}

// ── Eigen ────────────────────────────────────────────────────────────

#[test]
fn eigen_diagonal_input() {
    let a = Matrix::from_rows(&[[1.0_f64, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]);
    let ev = a.eigenvalues(0, 1e-10).unwrap();
    assert_eq!(ev, vec![1.0, 2.0, 3.0]);
}

#[test]
fn eigen_rotation_never_converges() {
    let a = Matrix::from_rows(&[[0.0_f64, -1.0], [1.0, 0.0]]);
    assert_eq!(
        a.eigenvalues(100, 1e-10).unwrap_err(),
        LinalgError::NonConvergence
    );
}

#[test]
fn eigen_budget_exhaustion_reported() {
    let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
    assert_eq!(
        a.eigenvalues(0, 1e-10).unwrap_err(),
        LinalgError::NonConvergence
    );
}

#[test]
fn eigen_pairs_of_symmetric_matrix() {
    let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
    let ev = a.eigenvalues(200, 1e-10).unwrap();
    let v = a.eigenvectors(200, 1e-10).unwrap();

    assert!((ev[0] - 3.0).abs() < TOL);
    assert!((ev[1] - 1.0).abs() < TOL);
    for j in 0..2 {
        let col = v.col(j);
        let av = &a * &col;
        for i in 0..2 {
            assert!((av[i] - ev[j] * col[i]).abs() < TOL, "pair {} row {}", j, i);
        }
    }
}

// ── SVD ──────────────────────────────────────────────────────────────

#[test]
fn svd_wide_matrix() {
    let a = Matrix::from_rows(&[[3.0_f64, 2.0, 2.0], [2.0, 3.0, -2.0]]);
    let svd = a.svd().unwrap();

    assert!((svd.s()[0] - 5.0).abs() < TOL);
    assert!((svd.s()[1] - 3.0).abs() < TOL);
    assert_matrix_near(&svd.reconstruct(), &a, TOL, "U*S*Vt");
    assert_matrix_near(
        &(&svd.u().transpose() * svd.u()),
        &Matrix::eye(2),
        1e-8,
        "UtU",
    );
}

// ── Substitution ─────────────────────────────────────────────────────

#[test]
fn substitution_zero_diagonal_rejected() {
    let l = Matrix::from_rows(&[[1.0_f64, 0.0], [2.0, 0.0]]);
    let b = Vector::from_slice(&[1.0, 1.0]);
    assert_eq!(
        forward_substitution(&l, &b).unwrap_err(),
        LinalgError::SingularOrDegenerate
    );

    let u = Matrix::from_rows(&[[0.0_f64, 2.0], [0.0, 1.0]]);
    assert_eq!(
        backward_substitution(&u, &b).unwrap_err(),
        LinalgError::SingularOrDegenerate
    );
}

#[test]
fn substitution_solves_triangular_systems() {
    let l = Matrix::from_rows(&[[2.0_f64, 0.0], [1.0, 3.0]]);
    let b = Vector::from_slice(&[4.0, 11.0]);
    let y = forward_substitution(&l, &b).unwrap();
    assert!((y[0] - 2.0).abs() < TOL);
    assert!((y[1] - 3.0).abs() < TOL);

    let u = Matrix::from_rows(&[[2.0_f64, 1.0], [0.0, 4.0]]);
    let c = Vector::from_slice(&[7.0, 8.0]);
    let x = backward_substitution(&u, &c).unwrap();
    assert!((x[0] - 2.5).abs() < TOL);
    assert!((x[1] - 2.0).abs() < TOL);
}

// ── Shape validation ─────────────────────────────────────────────────

#[test]
fn empty_matrices_rejected_everywhere() {
    let a: Matrix<f64> = Matrix::zeros(0, 0);
    let b: Vector<f64> = Vector::zeros(0);

    assert_eq!(a.lu().unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(a.qr().unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(a.cholesky().unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(a.ldlt().unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(a.solve(&b).unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(a.inverse().unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(
        a.eigenvalues(10, 1e-10).unwrap_err(),
        LinalgError::InvalidDimension
    );
    assert_eq!(a.svd().unwrap_err(), LinalgError::InvalidDimension);
    assert_eq!(
        forward_substitution(&a, &b).unwrap_err(),
        LinalgError::InvalidDimension
    );
    assert_eq!(
        backward_substitution(&a, &b).unwrap_err(),
        LinalgError::InvalidDimension
    );
}

#[test]
fn wide_qr_rejected() {
    let a = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(a.qr().unwrap_err(), LinalgError::InvalidDimension);
}

// ── Parallel kernels ─────────────────────────────────────────────────

#[cfg(feature = "rayon")]
#[test]
fn parallel_product_matches_sequential() {
    let a = Matrix::from_fn(17, 23, |i, j| ((i * 5 + j * 3) as f64).sin());
    let b = Matrix::from_fn(23, 11, |i, j| ((i * 2 + j * 7) as f64).cos());
    assert_eq!((&a * &b).as_slice(), a.par_mul(&b).as_slice());
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_factorizations_match_sequential() {
    let a = Matrix::from_fn(12, 12, |i, j| {
        if i == j {
            20.0 + i as f64
        } else {
            ((i * 3 + j) as f64 * 0.7).sin()
        }
    });

    let seq = a.lu().unwrap();
    let par = a.lu_parallel().unwrap();
    assert_eq!(seq.l().as_slice(), par.l().as_slice());
    assert_eq!(seq.u().as_slice(), par.u().as_slice());

    let seq = a.qr().unwrap();
    let par = a.qr_parallel().unwrap();
    assert_eq!(seq.q().as_slice(), par.q().as_slice());
    assert_eq!(seq.r().as_slice(), par.r().as_slice());
}
