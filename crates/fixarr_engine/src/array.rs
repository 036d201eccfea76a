/* 📖 # Why does every accessor return a Result?

Out-of-range indexing is a usage error the caller must see, not a panic and not a
silently clamped value. `get`, `set`, `stride` and `geometric_view` check the index
against the fixed length and return `ErrorKind::IndexOutOfBounds` on failure. There is
no `Index` impl, as it would have to panic.

Storage is a `Box<[T]>`: it has no spare capacity and no push/pop, so the length set at
construction is the length for the life of the array.
*/

use fixarr_base::{ErrorKind, FixarrResult};
use tracing::debug;

use crate::element::{Element, ElementCategory};

/// Stable even/odd split of an array's elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// Elements with `element mod 2 == 0`, in original order.
    pub evens: Vec<T>,
    /// Remaining elements, in original order.
    pub odds: Vec<T>,
}

/// Fixed-capacity ordered sequence of numeric elements.
///
/// # Examples
///
/// ```
/// use fixarr_engine::FixedArray;
///
/// let mut array = FixedArray::new(5, vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(array.get(2).unwrap(), 3);
///
/// array.set(4, 7).unwrap();
/// assert_eq!(array.sum().unwrap(), 17);
///
/// let partition = array.partition_by_parity().unwrap();
/// assert_eq!(partition.evens, vec![2, 4]);
/// assert_eq!(partition.odds, vec![1, 3, 7]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedArray<T: Element> {
    elements: Box<[T]>,
}

impl<T: Element> FixedArray<T> {
    /// Create an array of `size` elements from an explicit initializer.
    ///
    /// Fails with `InvalidLength` if `size` is zero or `values` does not hold exactly `size` elements.
    pub fn new(size: usize, values: impl Into<Vec<T>>) -> FixarrResult<Self> {
        let values = values.into();
        if size == 0 || values.len() != size {
            return Err(ErrorKind::InvalidLength {
                declared: size,
                supplied: values.len(),
            }
            .into());
        }
        debug!(size, element_type = T::TYPE_NAME, "created fixed array");
        Ok(Self {
            elements: values.into_boxed_slice(),
        })
    }

    /// Create an array of `size` copies of `value`.
    ///
    /// Fails with `CapacityExceeded` if storage for `size` elements cannot be allocated.
    pub fn filled(size: usize, value: T) -> FixarrResult<Self> {
        let mut values = Self::allocate(size)?;
        values.resize(size, value);
        Self::new(size, values)
    }

    /// Create an array whose element at `index` is `f(index)`.
    ///
    /// Fails with `CapacityExceeded` if storage for `size` elements cannot be allocated.
    pub fn from_fn(size: usize, f: impl FnMut(usize) -> T) -> FixarrResult<Self> {
        let mut values = Self::allocate(size)?;
        values.extend((0..size).map(f));
        Self::new(size, values)
    }

    fn allocate(size: usize) -> FixarrResult<Vec<T>> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|_| ErrorKind::CapacityExceeded {
                requested: size,
                element_type: T::TYPE_NAME,
            })?;
        Ok(values)
    }

    /// Number of elements. Fixed at construction, always at least one.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; arrays cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn check_index(&self, index: usize) -> FixarrResult<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(ErrorKind::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            }
            .into())
        }
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> FixarrResult<T> {
        self.check_index(index)?;
        Ok(self.elements[index])
    }

    /// Replace the element at `index`. On error the array is left untouched.
    pub fn set(&mut self, index: usize, value: T) -> FixarrResult<()> {
        self.check_index(index)?;
        self.elements[index] = value;
        Ok(())
    }

    /// Sum all elements left to right, starting from zero.
    ///
    /// Integer overflow is reported as `ArithmeticOverflow`; floats use IEEE-754 addition.
    /// The traversal order is fixed so float results are reproducible.
    pub fn sum(&self) -> FixarrResult<T> {
        let mut total = T::ZERO;
        for &element in self.elements.iter() {
            total = total
                .try_add(element)
                .ok_or(ErrorKind::ArithmeticOverflow {
                    operation: "sum",
                    element_type: T::TYPE_NAME,
                })?;
        }
        Ok(total)
    }

    /// Split elements into evens and odds, preserving relative order within each group.
    ///
    /// Only defined for integral element types.
    pub fn partition_by_parity(&self) -> FixarrResult<Partition<T>> {
        if T::CATEGORY != ElementCategory::Integral {
            return Err(ErrorKind::UnsupportedOperation {
                operation: "partition_by_parity",
                element_type: T::TYPE_NAME,
            }
            .into());
        }
        let mut partition = Partition {
            evens: Vec::new(),
            odds: Vec::new(),
        };
        for &element in self.elements.iter() {
            if element.is_even() == Some(true) {
                partition.evens.push(element);
            } else {
                partition.odds.push(element);
            }
        }
        Ok(partition)
    }

    /// Elements in reverse index order. The array itself is not modified.
    pub fn reverse_view(&self) -> Vec<T> {
        self.elements.iter().rev().copied().collect()
    }

    /// Elements at `start`, `start + step`, `start + 2 * step`, ... while in bounds.
    pub fn stride(&self, start: usize, step: usize) -> FixarrResult<Vec<T>> {
        if step == 0 {
            return Err(ErrorKind::InvalidInput {
                message: "stride step must be non-zero".to_string(),
            }
            .into());
        }
        self.check_index(start)?;
        Ok(self.elements[start..].iter().step_by(step).copied().collect())
    }

    /// Elements at 1-based positions `start`, `start * factor`, `start * factor^2`, ...
    /// while in bounds. Position `p` is index `p - 1`, so `(1, 2)` visits the 1st, 2nd,
    /// 4th, 8th ... elements.
    pub fn geometric_view(&self, start: usize, factor: usize) -> FixarrResult<Vec<T>> {
        if start == 0 {
            return Err(ErrorKind::InvalidInput {
                message: "geometric start position must be at least 1".to_string(),
            }
            .into());
        }
        if factor < 2 {
            return Err(ErrorKind::InvalidInput {
                message: format!("geometric factor must be at least 2, got {}", factor),
            }
            .into());
        }
        self.check_index(start - 1)?;
        let mut visited = Vec::new();
        let mut position = Some(start);
        while let Some(p) = position.filter(|&p| p <= self.elements.len()) {
            visited.push(self.elements[p - 1]);
            position = p.checked_mul(factor);
        }
        Ok(visited)
    }

    /// The whole array as `times` identical rows, outer loop over rows and inner loop over
    /// elements. Zero rows yields an empty grid.
    pub fn repeat_rows(&self, times: usize) -> Vec<Vec<T>> {
        (0..times)
            .map(|_| self.elements.iter().copied().collect())
            .collect()
    }
}

impl<'a, T: Element> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
