use ndarray::{Array1, ArrayView1, Zip};
use rand::Rng;

use super::{Float, Instance};
use crate::error::{Error, Result};

impl<F: Float> Instance<F> {
    /// Create a new anonymous instance from its coordinates
    pub fn new(data: Array1<F>) -> Self {
        Instance {
            name: String::new(),
            data,
        }
    }

    /// Attach a name to the instance
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Instance of dimension `n` holding only zeroes
    pub fn zeros(n: usize) -> Self {
        Instance::new(Array1::zeros(n))
    }

    /// Draw a new instance whose i-th coordinate is uniformly distributed in `[min[i], max[i])`
    pub fn random_within<R: Rng>(
        min: ArrayView1<F>,
        max: ArrayView1<F>,
        rng: &mut R,
    ) -> Result<Self> {
        Error::check_dimension(min.len(), max.len())?;

        let data = min
            .iter()
            .zip(max.iter())
            .map(|(&lo, &hi)| lo + F::cast(rng.gen::<f64>()) * (hi - lo))
            .collect::<Array1<F>>();

        Ok(Instance::new(data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the coordinates
    pub fn data(&self) -> ArrayView1<'_, F> {
        self.data.view()
    }

    /// Number of coordinates
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Consume the instance and return its coordinates
    pub fn into_data(self) -> Array1<F> {
        self.data
    }

    /// Element-wise sum of two instances
    ///
    /// The result keeps the name of `self`. Fails if the two instances have different sizes.
    pub fn sum(&self, other: &Instance<F>) -> Result<Instance<F>> {
        Error::check_dimension(self.size(), other.size())?;

        let data = Zip::from(&self.data)
            .and(&other.data)
            .map_collect(|&a, &b| a + b);

        Ok(Instance {
            name: self.name.clone(),
            data,
        })
    }

    /// Product between the instance and the scalar `k`
    pub fn scale(&self, k: F) -> Instance<F> {
        Instance {
            name: self.name.clone(),
            data: &self.data * k,
        }
    }
}

impl<F: Float> From<Array1<F>> for Instance<F> {
    fn from(data: Array1<F>) -> Self {
        Instance::new(data)
    }
}

impl<F: Float> From<Vec<F>> for Instance<F> {
    fn from(data: Vec<F>) -> Self {
        Instance::new(Array1::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn sum_is_element_wise() {
        let a = Instance::from(vec![1., 2., 3.]).with_name("a");
        let b = Instance::from(vec![0.5, -2., 10.]);

        let c = a.sum(&b).unwrap();
        assert_abs_diff_eq!(c.data(), array![1.5, 0., 13.]);
        assert_eq!(c.name(), "a");
        // operands untouched
        assert_abs_diff_eq!(a.data(), array![1., 2., 3.]);
    }

    #[test]
    fn sum_rejects_different_sizes() {
        let a = Instance::from(vec![1., 2., 3.]);
        let b = Instance::from(vec![1., 2.]);

        assert_eq!(
            a.sum(&b),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn scale_returns_new_instance() {
        let a = Instance::from(vec![1., -2.]).with_name("p");
        let b = a.scale(0.5);

        assert_abs_diff_eq!(b.data(), array![0.5, -1.]);
        assert_eq!(b.name(), "p");
        assert_abs_diff_eq!(a.data(), array![1., -2.]);
    }

    #[test]
    fn clone_is_independent() {
        let original = Instance::from(vec![1., 2.]).with_name("orig");
        let mut buffer = original.clone().into_data();
        buffer[0] = 42.;

        assert_abs_diff_eq!(original.data(), array![1., 2.]);
        assert_eq!(original.name(), "orig");
    }

    #[test]
    fn zeros_has_requested_size() {
        let z = Instance::<f64>::zeros(4);
        assert_eq!(z.size(), 4);
        assert!(z.data().iter().all(|&x| x == 0.));
        assert_eq!(z.name(), "");
    }

    #[test]
    fn random_within_stays_in_bounds() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let min = array![-1., 10., 5.];
        let max = array![1., 20., 5.];

        for _ in 0..100 {
            let inst = Instance::random_within(min.view(), max.view(), &mut rng).unwrap();
            assert_eq!(inst.size(), 3);
            for ((&x, &lo), &hi) in inst.data().iter().zip(min.iter()).zip(max.iter()) {
                assert!(x >= lo && x <= hi);
            }
        }
    }

    #[test]
    fn random_within_rejects_mismatched_bounds() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let res = Instance::<f64>::random_within(
            array![0., 0.].view(),
            array![1.].view(),
            &mut rng,
        );
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }
}
