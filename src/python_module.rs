//! Python bindings for murmur-bloom using PyO3

use crate::bloom::BloomFilter;
use crate::hash::murmurhash2 as murmurhash2_impl;
use crate::utils::optimal_bloom_parameters;
use numpy::{IntoPyArray, PyArray1};
use pyo3::prelude::*;

/// Python wrapper for BloomFilter
#[pyclass(name = "BloomFilter")]
struct PyBloomFilter {
    inner: BloomFilter,
}

#[pymethods]
impl PyBloomFilter {
    #[new]
    fn new(bytes: usize, hashes: u32) -> PyResult<Self> {
        let filter = BloomFilter::new(bytes, hashes)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        Ok(PyBloomFilter { inner: filter })
    }

    fn insert(&mut self, key: &[u8]) {
        self.inner.insert(key);
    }

    fn contains(&self, key: &[u8]) -> bool {
        self.inner.contains(key)
    }

    fn __contains__(&self, key: &[u8]) -> bool {
        self.inner.contains(key)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    #[getter]
    fn bits(&self) -> usize {
        self.inner.bits()
    }

    #[getter]
    fn bytes(&self) -> usize {
        self.inner.bytes()
    }

    #[getter]
    fn hashes(&self) -> u32 {
        self.inner.hashes()
    }

    fn count_ones(&self) -> usize {
        self.inner.count_ones()
    }

    fn load_factor(&self) -> f64 {
        self.inner.load_factor()
    }

    fn estimated_fpr(&self) -> f64 {
        self.inner.estimated_fpr()
    }

    /// Copy of the bit buffer as a numpy uint8 array
    fn array<'py>(&self, py: Python<'py>) -> &'py PyArray1<u8> {
        self.inner.as_bytes().to_vec().into_pyarray(py)
    }

    fn stats(&self) -> String {
        self.inner.stats().to_string()
    }

    fn __str__(&self) -> String {
        format!(
            "BloomFilter(bits={}, hashes={}, fill={:.6})",
            self.inner.bits(),
            self.inner.hashes(),
            self.inner.load_factor()
        )
    }

    fn __repr__(&self) -> String {
        format!(
            "BloomFilter(bytes={}, hashes={})",
            self.inner.bytes(),
            self.inner.hashes()
        )
    }
}

/// MurmurHash2 of `key` with `seed`
#[pyfunction]
fn murmurhash2(key: &[u8], seed: u32) -> u32 {
    murmurhash2_impl(key, seed)
}

/// `(bytes, hashes, expected_fpr)` for `n` keys at false positive rate `fpr`
#[pyfunction]
fn optimal_parameters(n: usize, fpr: f64) -> PyResult<(usize, u32, f64)> {
    let params = optimal_bloom_parameters(n, fpr)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
    Ok((params.bytes, params.hashes, params.expected_fpr))
}

/// Python module definition
#[pymodule]
fn murmur_bloom(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyBloomFilter>()?;

    m.add_function(wrap_pyfunction!(murmurhash2, m)?)?;
    m.add_function(wrap_pyfunction!(optimal_parameters, m)?)?;

    m.add("SEED", crate::bloom::SEED)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
