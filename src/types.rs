pub type Scalar = f64;
