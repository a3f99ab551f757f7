/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `cmat-demo`: known answers first, then a batch of random products.

use crate::FailResult;

use ::cmat_matrix::{Matrix, add, multiply, equal_with_tolerance};
use ::cmat_par::ParCluster;
use ::cmat_stats::Summary;
use ::cmat_interop::{self as interop, RObject};
use ::cmat_tasks_config::{Settings, ProductSpec, Threading};

use ::itertools::Itertools;
use ::rand::{Rng, SeedableRng};
use ::rand::rngs::StdRng;
use ::std::path::Path;

pub(crate) fn run(settings: &Settings, json_out: Option<&Path>) -> FailResult<()> {
    check_known_answers()?;
    info!("known answers OK");

    info!("products: {}", settings.products.iter().map(spec_name).join(", "));
    let inputs = random_inputs(settings)?;
    let products = compute_products(settings, inputs)?;

    for (spec, product) in settings.products.iter().zip(&products) {
        match Summary::of(&product.data) {
            Some(s) => info!(
                "{}: mean {:+.4}, median {:+.4}, range [{:+.4}, {:+.4}], std dev {}",
                spec_name(spec), s.mean, s.median, s.min, s.max,
                s.std_dev.map(|x| format!("{:.4}", x)).unwrap_or_else(|| "n/a".to_string()),
            ),
            None => info!("{}: empty product", spec_name(spec)),
        }
    }

    if let Some(path) = json_out {
        let obj = products_to_object(&settings.products, &products)?;
        let file = ::std::fs::File::create(path)?;
        ::serde_json::to_writer_pretty(::std::io::BufWriter::new(file), &obj)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn spec_name(spec: &ProductSpec) -> String
{ format!("{}x{}x{}", spec.rows, spec.inner, spec.cols) }

/// Small problems whose answers were worked out by hand.
pub(crate) fn check_known_answers() -> FailResult<()> {
    let m = Matrix::from_data(3, 2, &[1.1, 2.2, 3.3, 4.4, 5.5, 6.6])?;
    debug!("m =\n{}", m);

    ensure!(m.get_row(1)? == vec![2.2, 5.5], "wrong row");
    ensure!(m.get_column(0)? == vec![1.1, 2.2, 3.3], "wrong column");
    ensure!(m.get_element(2, 1)? == 6.6, "wrong element");

    let ones_and_twos = Matrix::from_data(3, 2, &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0])?;
    let sum = add(&ones_and_twos, &m)?;
    let expected = Matrix::from_data(3, 2, &[2.1, 3.2, 4.3, 6.4, 7.5, 8.6])?;
    ensure!(equal_with_tolerance(&sum, &expected, 1e-15), "wrong sum:\n{}", sum);

    let b = Matrix::from_data(2, 2, &[1.1, 1.1, 2.2, 2.2])?;
    let product = multiply(&m, &b)?;
    let expected = Matrix::from_data(3, 2, &[6.05, 8.47, 10.89, 12.1, 16.94, 21.78])?;
    ensure!(equal_with_tolerance(&product, &expected, 1e-13), "wrong product:\n{}", product);

    let identity = Matrix::identity(m.ncol)?;
    ensure!(equal_with_tolerance(&multiply(&m, &identity)?, &m, 1e-15), "m * I != m");
    ensure!(m.to_transpose()?.to_transpose()? == m, "transpose is not an involution");
    Ok(())
}

/// All random data is drawn up front, in order, so that the results do
/// not depend on how the products get scheduled.
pub(crate) fn random_inputs(settings: &Settings) -> FailResult<Vec<(Matrix, Matrix)>> {
    let mut rng = StdRng::seed_from_u64(settings.seed);
    settings.products.iter().map(|spec| {
        let a = random_matrix(&mut rng, spec.rows, spec.inner)?;
        let b = random_matrix(&mut rng, spec.inner, spec.cols)?;
        Ok((a, b))
    }).collect()
}

fn random_matrix(rng: &mut StdRng, nrow: usize, ncol: usize) -> FailResult<Matrix> {
    let data = (0..nrow * ncol).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Ok(Matrix::from_vec(nrow as isize, ncol as isize, data)?)
}

pub(crate) fn compute_products(settings: &Settings, inputs: Vec<(Matrix, Matrix)>) -> FailResult<Vec<Matrix>> {
    let tol = settings.tolerance;
    match settings.threading {
        Threading::Serial => inputs.into_iter().map(|job| product_job(job, tol)).collect(),
        Threading::Rayon => {
            let cluster = match settings.max_workers {
                Some(n) => ParCluster::new(n)?,
                None => ParCluster::with_all_cpus()?,
            };
            info!("computing {} products on {} workers", inputs.len(), cluster.max_procs());
            cluster.try_map(inputs, |job| product_job(job, tol))
        },
    }
}

/// Computes `a * b`, and checks on the side that `a * I == a`.
fn product_job((a, b): (Matrix, Matrix), tol: f64) -> FailResult<Matrix> {
    let product = multiply(&a, &b)?;

    let identity = Matrix::identity(a.ncol)?;
    ensure!(
        equal_with_tolerance(&multiply(&a, &identity)?, &a, tol),
        "A * I differs from A for a {}x{} matrix", a.nrow, a.ncol
    );
    trace!("finished {}x{} * {}x{}", a.nrow, a.ncol, b.nrow, b.ncol);
    Ok(product)
}

/// A named list of the products, plus a data frame summarizing them.
pub(crate) fn products_to_object(specs: &[ProductSpec], products: &[Matrix]) -> FailResult<RObject> {
    ensure!(specs.len() == products.len(), "{} specs for {} products", specs.len(), products.len());
    let names = specs.iter().map(spec_name).collect::<Vec<_>>();

    let matrices = products.iter().map(interop::matrix_to_object).collect::<Result<Vec<_>, _>>()?;
    let matrices = interop::make_named_list(&names[..], matrices)?;

    let mut nrows = vec![];
    let mut ncols = vec![];
    for m in products {
        nrows.push(runtime_int(m.nrow)?);
        ncols.push(runtime_int(m.ncol)?);
    }
    // (sums rather than means; an empty product has no mean, and the runtime's
    //  real vectors have no missing value to hold one)
    let sums = products.iter().map(|m| ::cmat_stats::sum(&m.data)).collect::<Vec<_>>();
    let summary = interop::make_data_frame(
        &names[..],
        &["nrow".to_string(), "ncol".to_string(), "sum".to_string()],
        vec![
            interop::integer_to_object(&nrows),
            interop::integer_to_object(&ncols),
            interop::numeric_to_object(&sums),
        ],
    )?;

    Ok(interop::make_named_list(&["products", "summary"], vec![matrices, summary])?)
}

/// The runtime's integers are 32-bit.
fn runtime_int(dim: isize) -> FailResult<i32> {
    use ::std::convert::TryFrom;
    i32::try_from(dim).map_err(|_| format_err!("dimension {} does not fit in a runtime integer", dim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::cmat_interop::RValue;

    fn small_settings(threading: Threading) -> Settings {
        Settings {
            threading,
            max_workers: Some(2),
            seed: 7,
            products: vec![
                ProductSpec { rows: 2, inner: 3, cols: 4 },
                ProductSpec { rows: 5, inner: 1, cols: 5 },
                ProductSpec { rows: 0, inner: 3, cols: 2 },
            ],
            tolerance: 1e-12,
        }
    }

    #[test]
    fn known_answers() {
        check_known_answers().unwrap();
    }

    #[test]
    fn inputs_are_deterministic() {
        let settings = small_settings(Threading::Serial);
        let first = random_inputs(&settings).unwrap();
        let second = random_inputs(&settings).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].0.dims(), (2, 3));
        assert_eq!(first[0].1.dims(), (3, 4));
        assert!(first[0].0.data.iter().all(|&x| -1.0 <= x && x < 1.0));
    }

    #[test]
    fn threading_does_not_change_results() {
        let serial = small_settings(Threading::Serial);
        let rayon = small_settings(Threading::Rayon);
        let a = compute_products(&serial, random_inputs(&serial).unwrap()).unwrap();
        let b = compute_products(&rayon, random_inputs(&rayon).unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iter().map(|m| m.dims()).collect::<Vec<_>>(), vec![(2, 4), (5, 5), (0, 2)]);
    }

    #[test]
    fn product_job_checks_shapes() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 3).unwrap();
        assert!(product_job((a, b), 0.0).is_err());
    }

    #[test]
    fn interop_output() {
        let settings = small_settings(Threading::Serial);
        let products = compute_products(&settings, random_inputs(&settings).unwrap()).unwrap();
        let obj = products_to_object(&settings.products, &products).unwrap();

        assert_eq!(obj.attributes.names, Some(vec!["products".to_string(), "summary".to_string()]));
        let parts = match &obj.value {
            RValue::List(parts) => parts,
            v => panic!("{:?}", v),
        };
        assert_eq!(parts[0].len(), 3);
        assert!(parts[1].is_data_frame());
        assert_eq!(parts[1].attributes.row_names, Some(vec!["2x3x4".to_string(), "5x1x5".to_string(), "0x3x2".to_string()]));

        let back = ::cmat_interop::as_matrix(match &parts[0].value {
            RValue::List(ms) => &ms[1],
            v => panic!("{:?}", v),
        }).unwrap();
        assert_eq!(back, products[1]);

        assert!(products_to_object(&settings.products[..1], &products).is_err());
    }

    #[test]
    fn json_output_reads_back_with_empty_products() {
        let settings = small_settings(Threading::Serial);
        let products = compute_products(&settings, random_inputs(&settings).unwrap()).unwrap();
        assert_eq!(products[2].dims(), (0, 2));

        let obj = products_to_object(&settings.products, &products).unwrap();
        let text = ::serde_json::to_string(&obj).unwrap();
        assert!(!text.contains("null"), "{}", text);

        let back: RObject = ::serde_json::from_str(&text).unwrap();
        assert_eq!(back, obj);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_dimension_is_reported() {
        let spec = ProductSpec { rows: 3_000_000_000, inner: 0, cols: 0 };
        let product = Matrix { nrow: 3_000_000_000, ncol: 0, data: vec![] };
        assert!(product.is_size_valid());
        assert!(products_to_object(&[spec], &[product]).is_err());
    }
}
