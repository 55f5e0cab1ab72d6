use crate::data::example::Example;

/// The four XOR pairs encoded in the activation's (-1, 1) range.
pub fn builtin_xor() -> Vec<Example> {
    vec![
        Example::new(vec![-1.0, -1.0], vec![-1.0]),
        Example::new(vec![-1.0, 1.0], vec![1.0]),
        Example::new(vec![1.0, -1.0], vec![1.0]),
        Example::new(vec![1.0, 1.0], vec![-1.0]),
    ]
}
