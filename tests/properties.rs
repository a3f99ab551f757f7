/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Randomized checks of the matrix's contract, over many shapes.

#[macro_use] extern crate cmat_assert_close;

use ::cmat::{Matrix, ErrorKind, add, multiply, equal, equal_with_tolerance};
use ::pretty_assertions::assert_eq;
use ::rand::{Rng, SeedableRng};
use ::rand::rngs::StdRng;

const TRIALS: usize = 200;

fn rng() -> StdRng
{ StdRng::seed_from_u64(0x636d6174) }

fn random_shape(rng: &mut StdRng) -> (isize, isize)
{ (rng.gen_range(0..8), rng.gen_range(0..8)) }

fn random_data(rng: &mut StdRng, len: usize) -> Vec<f64>
{ (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect() }

fn random_matrix(rng: &mut StdRng) -> Matrix {
    let (nrow, ncol) = random_shape(rng);
    let data = random_data(rng, (nrow * ncol) as usize);
    Matrix::from_vec(nrow, ncol, data).unwrap()
}

#[test]
fn from_data_is_column_major() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let (nrow, ncol) = random_shape(&mut rng);
        let data = random_data(&mut rng, (nrow * ncol) as usize);
        let m = Matrix::from_data(nrow, ncol, &data).unwrap();
        assert_eq!(m.dims(), (nrow, ncol));
        for r in 0..nrow {
            for c in 0..ncol {
                assert_eq!(m.get_element(r, c).unwrap(), data[(c * nrow + r) as usize]);
            }
        }
        assert_eq!(m.to_column_major_vec().unwrap(), data);
    }
}

#[test]
fn copies_do_not_alias() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let original = random_matrix(&mut rng);
        if original.data.is_empty() {
            continue;
        }
        let snapshot = original.data.clone();
        let r = rng.gen_range(0..original.nrow);
        let c = rng.gen_range(0..original.ncol);

        let mut copy = original.to_copy().unwrap();
        copy.set_element(r, c, 1e6).unwrap();
        copy.append_column(&vec![0.0; original.nrow as usize]).unwrap();
        assert_eq!(original.data, snapshot);

        // and the other way around
        let mut original = original;
        let copy = original.to_copy().unwrap();
        original.multiply_constant(-3.0).unwrap();
        assert_eq!(copy.data, snapshot);

        // copy-out accessors are also independent
        let mut row = copy.get_row(r).unwrap();
        row[c as usize] = 1e6;
        assert_eq!(copy.data, snapshot);
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let m = random_matrix(&mut rng);
        let t = m.to_transpose().unwrap();
        assert_eq!(t.dims(), (m.ncol, m.nrow));
        for r in 0..m.nrow {
            for c in 0..m.ncol {
                assert_eq!(t.get_element(c, r).unwrap(), m.get_element(r, c).unwrap());
            }
        }
        assert!(equal(&t.to_transpose().unwrap(), &m));
    }
}

#[test]
fn append_column_then_read_back() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let mut m = random_matrix(&mut rng);
        let before = m.clone();
        let column = random_data(&mut rng, m.nrow as usize);

        m.append_column(&column).unwrap();
        assert_eq!(m.dims(), (before.nrow, before.ncol + 1));
        assert_eq!(m.get_column(m.ncol - 1).unwrap(), column);
        for c in 0..before.ncol {
            assert_eq!(m.get_column(c).unwrap(), before.get_column(c).unwrap());
        }
    }
}

#[test]
fn append_row_then_read_back() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let mut m = random_matrix(&mut rng);
        let before = m.clone();
        let row = random_data(&mut rng, m.ncol as usize);

        m.append_row(&row).unwrap();
        assert_eq!(m.dims(), (before.nrow + 1, before.ncol));
        assert_eq!(m.get_row(m.nrow - 1).unwrap(), row);
        for r in 0..before.nrow {
            for c in 0..before.ncol {
                assert_eq!(m.get_element(r, c).unwrap(), before.get_element(r, c).unwrap());
            }
        }
    }
}

#[test]
fn both_growth_orders_agree() {
    let mut rng = rng();
    for _ in 0..20 {
        let target = random_matrix(&mut rng);
        let mut by_rows = Matrix::zeros(0, target.ncol).unwrap();
        for row in target.rows_copied().unwrap() {
            by_rows.append_row(&row).unwrap();
        }
        let mut by_cols = Matrix::zeros(target.nrow, 0).unwrap();
        for col in target.columns_copied().unwrap() {
            by_cols.append_column(&col).unwrap();
        }
        // (this includes shapes like 5x0, built from five empty rows)
        assert_eq!(by_rows, target);
        assert_eq!(by_cols, target);
    }
}

#[test]
fn multiply_by_identity() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let m = random_matrix(&mut rng);
        let identity = Matrix::identity(m.ncol).unwrap();
        let product = multiply(&m, &identity).unwrap();
        assert!(equal_with_tolerance(&product, &m, 1e-15));
        assert_close!(abs=1e-15, rel=0.0, &product, &m);

        let identity = Matrix::identity(m.nrow).unwrap();
        assert!(equal_with_tolerance(&multiply(&identity, &m).unwrap(), &m, 1e-15));
    }
}

#[test]
fn multiply_distributes_over_add() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let a = random_matrix(&mut rng);
        let inner = a.ncol;
        let cols = rng.gen_range(0..6);
        let b = Matrix::from_vec(inner, cols, random_data(&mut rng, (inner * cols) as usize)).unwrap();
        let c = Matrix::from_vec(inner, cols, random_data(&mut rng, (inner * cols) as usize)).unwrap();

        let lhs = multiply(&a, &add(&b, &c).unwrap()).unwrap();
        let rhs = add(&multiply(&a, &b).unwrap(), &multiply(&a, &c).unwrap()).unwrap();
        assert_close!(abs=1e-10, rel=1e-10, &lhs, &rhs);
    }
}

#[test]
fn known_answers() {
    let m = Matrix { nrow: 3, ncol: 2, data: vec![1.1, 2.2, 3.3, 4.4, 5.5, 6.6] };
    assert_eq!(m.get_row(1).unwrap(), vec![2.2, 5.5]);
    assert_eq!(m.get_column(0).unwrap(), vec![1.1, 2.2, 3.3]);
    assert_eq!(m.get_element(2, 1).unwrap(), 6.6);

    let a = Matrix { nrow: 3, ncol: 2, data: vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0] };
    let sum = add(&a, &m).unwrap();
    let expected = Matrix { nrow: 3, ncol: 2, data: vec![2.1, 3.2, 4.3, 6.4, 7.5, 8.6] };
    assert_close!(abs=1e-15, rel=0.0, &sum, &expected);

    let b = Matrix { nrow: 2, ncol: 2, data: vec![1.1, 1.1, 2.2, 2.2] };
    let product = multiply(&m, &b).unwrap();
    let expected = Matrix { nrow: 3, ncol: 2, data: vec![6.05, 8.47, 10.89, 12.1, 16.94, 21.78] };
    assert!(equal_with_tolerance(&product, &expected, 1e-13));
}

#[test]
fn different_shapes_are_never_equal() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let (nrow, ncol) = (rng.gen_range(1..6), rng.gen_range(1..6));
        if nrow == ncol {
            continue;
        }
        let data = random_data(&mut rng, (nrow * ncol) as usize);
        let a = Matrix::from_data(nrow, ncol, &data).unwrap();
        let b = Matrix::from_data(ncol, nrow, &data).unwrap();
        assert!(!equal(&a, &b));
        assert!(!equal_with_tolerance(&a, &b, ::std::f64::INFINITY));
        assert_ne!(a, b);
    }
}

#[test]
fn negative_dimensions_are_invalid() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let bad = -rng.gen_range(1..1000);
        let good = rng.gen_range(0..4);
        for &(nrow, ncol) in &[(bad, good), (good, bad), (bad, bad)] {
            assert_eq!(Matrix::zeros(nrow, ncol).unwrap_err().kind(), ErrorKind::InvalidIndex);
            assert_eq!(Matrix::from_data(nrow, ncol, &[]).unwrap_err().kind(), ErrorKind::InvalidIndex);
            assert_eq!(Matrix::from_vec(nrow, ncol, vec![1.0; 6]).unwrap_err().kind(), ErrorKind::InvalidIndex);
        }
        assert_eq!(Matrix::identity(bad).unwrap_err().kind(), ErrorKind::InvalidIndex);
    }
}

#[test]
fn corrupted_header_is_always_caught() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let mut m = random_matrix(&mut rng);
        // push the header out of agreement with the buffer
        match rng.gen_range(0..3) {
            0 => m.nrow += 1,
            1 => m.ncol += 1,
            _ => m.data.push(0.0),
        }
        if m.is_size_valid() {
            // growing an axis of an empty matrix can leave it consistent (3x0 -> 4x0)
            continue;
        }
        let before = m.clone();

        let kinds = vec![
            m.get_element(0, 0).map(drop),
            m.get_row(0).map(drop),
            m.get_column(0).map(drop),
            m.to_copy().map(drop),
            m.to_transpose().map(drop),
            m.to_column_major_vec().map(drop),
            m.clone().set_element(0, 0, 1.0),
            m.clone().set_row(0, &[]),
            m.clone().set_column(0, &[]),
            m.clone().append_row(&[]),
            m.clone().append_column(&[]),
            m.clone().add_constant(1.0),
            m.clone().multiply_constant(2.0),
            add(&m, &m).map(drop),
            multiply(&m, &m).map(drop),
        ];
        for result in kinds {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::ImpossibleMatrix);
        }
        // failed in-place operations leave the buffer alone
        let mut scaled = m.clone();
        assert!(scaled.multiply_constant(2.0).is_err());
        assert_eq!(scaled.data, before.data);
    }
}

#[test]
fn failed_setters_change_nothing() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let mut m = random_matrix(&mut rng);
        let before = m.clone();

        let wrong_row = random_data(&mut rng, m.ncol as usize + 1);
        assert!(m.set_row(0, &wrong_row).is_err());
        let right_row = random_data(&mut rng, m.ncol as usize);
        assert!(m.set_row(m.nrow, &right_row).is_err());
        assert!(m.set_row(-1, &right_row).is_err());

        let right_col = random_data(&mut rng, m.nrow as usize);
        assert!(m.set_column(m.ncol, &right_col).is_err());
        assert!(m.set_element(m.nrow, m.ncol, 1.0).is_err());
        assert!(m.append_row(&wrong_row).is_err());

        assert_eq!(m, before);
    }
}

#[test]
fn serde_uses_kebab_case_header() {
    let m = Matrix::from_data(2, 1, &[0.5, -0.5]).unwrap();
    let json = ::serde_json::to_value(&m).unwrap();
    assert_eq!(json, ::serde_json::json!({ "nrow": 2, "ncol": 1, "data": [0.5, -0.5] }));
    let back: Matrix = ::serde_json::from_value(json).unwrap();
    assert_eq!(back, m);
}
