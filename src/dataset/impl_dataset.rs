use std::convert::TryFrom;
use std::ops::Index;

use ndarray::{Array1, Array2, Axis, Zip};

use super::{DataSet, Float, Instance};
use crate::distance::Distance;
use crate::error::{Error, Result};

impl<F: Float> DataSet<F> {
    /// Create an empty data set
    pub fn new() -> Self {
        DataSet {
            instances: Vec::new(),
            dimension: 0,
        }
    }

    /// Create a data set holding a single instance, which fixes its dimension
    pub fn from_instance(instance: Instance<F>) -> Self {
        DataSet {
            dimension: instance.size(),
            instances: vec![instance],
        }
    }

    /// Append an instance
    ///
    /// Passing `None` is a no-op. An instance whose size differs from the established
    /// dimension is rejected and the data set is left unchanged.
    pub fn push<I: Into<Option<Instance<F>>>>(&mut self, instance: I) -> Result<()> {
        let instance = match instance.into() {
            Some(instance) => instance,
            None => return Ok(()),
        };

        if self.instances.is_empty() {
            self.dimension = instance.size();
        } else {
            Error::check_dimension(self.dimension, instance.size())?;
        }
        self.instances.push(instance);

        Ok(())
    }

    /// Append every instance of `instances`
    ///
    /// All instances are validated before any of them is appended, so a failing call leaves
    /// the data set unchanged.
    pub fn extend<I: IntoIterator<Item = Instance<F>>>(&mut self, instances: I) -> Result<()> {
        let instances = instances.into_iter().collect::<Vec<_>>();

        let dimension = match (self.instances.is_empty(), instances.first()) {
            (_, None) => return Ok(()),
            (true, Some(first)) => first.size(),
            (false, Some(_)) => self.dimension,
        };
        for instance in &instances {
            Error::check_dimension(dimension, instance.size())?;
        }

        self.dimension = dimension;
        self.instances.extend(instances);

        Ok(())
    }

    /// Concatenate two data sets into a new one, instances of `a` first
    pub fn merge(a: &DataSet<F>, b: &DataSet<F>) -> Result<DataSet<F>> {
        let mut merged = a.clone();
        merged.extend(b.instances.iter().cloned())?;

        Ok(merged)
    }

    /// Maximum distance between two instances of the data set
    ///
    /// Returns zero for data sets with less than two instances.
    pub fn diameter<D: Distance<F>>(&self, dist_fn: &D) -> Result<F> {
        let mut max = F::zero();
        for (i, a) in self.instances.iter().enumerate() {
            for b in &self.instances[i + 1..] {
                let d = dist_fn.distance(a, b)?;
                if d > max {
                    max = d;
                }
            }
        }

        Ok(max)
    }

    /// Per-dimension minimum and maximum over all instances, `None` if the set is empty
    pub fn bounds(&self) -> Option<(Array1<F>, Array1<F>)> {
        let (first, rest) = self.instances.split_first()?;
        let mut min = first.data().to_owned();
        let mut max = min.clone();

        for instance in rest {
            Zip::from(&mut min)
                .and(&mut max)
                .and(instance.data())
                .for_each(|lo, hi, &x| {
                    if x < *lo {
                        *lo = x;
                    }
                    if x > *hi {
                        *hi = x;
                    }
                });
        }

        Some((min, max))
    }

    /// Size shared by every instance of the set, `0` while empty
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Instance<F>> {
        self.instances.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instance<F>> {
        self.instances.iter()
    }

    pub fn instances(&self) -> &[Instance<F>] {
        &self.instances
    }

    pub fn into_instances(self) -> Vec<Instance<F>> {
        self.instances
    }
}

impl<F: Float> Default for DataSet<F> {
    fn default() -> Self {
        DataSet::new()
    }
}

impl<F: Float> Index<usize> for DataSet<F> {
    type Output = Instance<F>;

    fn index(&self, idx: usize) -> &Instance<F> {
        &self.instances[idx]
    }
}

impl<'a, F: Float> IntoIterator for &'a DataSet<F> {
    type Item = &'a Instance<F>;
    type IntoIter = std::slice::Iter<'a, Instance<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

/// Every row of the matrix becomes an anonymous instance
impl<F: Float> From<Array2<F>> for DataSet<F> {
    fn from(records: Array2<F>) -> Self {
        let dimension = if records.nrows() == 0 {
            0
        } else {
            records.ncols()
        };
        DataSet {
            dimension,
            instances: records
                .axis_iter(Axis(0))
                .map(|row| Instance::new(row.to_owned()))
                .collect(),
        }
    }
}

impl<F: Float> TryFrom<Vec<Instance<F>>> for DataSet<F> {
    type Error = Error;

    fn try_from(instances: Vec<Instance<F>>) -> Result<Self> {
        let mut dataset = DataSet::new();
        dataset.extend(instances)?;

        Ok(dataset)
    }
}
