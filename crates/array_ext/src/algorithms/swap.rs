use crate::ArrayError;

/// Exchanges `data[a]` and `data[b]`.
///
/// Both indices are checked before anything is touched.
pub fn swap<T>(data: &mut [T], a: usize, b: usize) -> Result<(), ArrayError> {
    let len = data.len();
    for index in [a, b] {
        if index >= len {
            return Err(ArrayError::IndexOutOfRange { index, len });
        }
    }
    data.swap(a, b);
    Ok(())
}
