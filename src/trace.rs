//! Call tracing for arbitrary functions.
//!
//! A traced function emits a `called` event with its arguments before it runs and a `returned`
//! (or `failed`) event afterwards. Functions with several arguments are traced by taking a
//! tuple. Events go to whatever `tracing` subscriber is installed.

use std::fmt::{Debug, Display};

use tracing::{debug, warn};

/// Wrap `f` so that every call is logged under `label`. The return value is passed through
/// unchanged.
pub fn trace<A, R, F>(label: impl Into<String>, f: F) -> impl Fn(A) -> R
where
    A: Debug,
    R: Debug,
    F: Fn(A) -> R,
{
    let label = label.into();
    move |args: A| {
        debug!(label = %label, args = ?args, "called");
        let ret = f(args);
        debug!(label = %label, value = ?ret, "returned");
        ret
    }
}

/// Like `trace`, for functions that can fail. An error is logged as `failed` and then handed
/// back to the caller unchanged.
pub fn trace_fallible<A, T, E, F>(label: impl Into<String>, f: F) -> impl Fn(A) -> Result<T, E>
where
    A: Debug,
    T: Debug,
    E: Display,
    F: Fn(A) -> Result<T, E>,
{
    let label = label.into();
    move |args: A| {
        debug!(label = %label, args = ?args, "called");
        let ret = f(args);
        match &ret {
            Ok(value) => debug!(label = %label, value = ?value, "returned"),
            Err(err) => warn!(label = %label, error = %err, "failed"),
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpolate, parse_color, Color, Error};

    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();
        let ret = tracing::subscriber::with_default(subscriber, f);
        (ret, captured.lines())
    }

    #[test]
    fn trace_passes_value_through() {
        let (ret, lines) = with_captured_logs(|| {
            let double = trace("double", |x: i32| x * 2);
            double(21)
        });

        assert_eq!(42, ret);
        assert_eq!(2, lines.len());
        assert!(lines[0].contains("called"));
        assert!(lines[0].contains("label=double"));
        assert!(lines[0].contains("args=21"));
        assert!(lines[1].contains("returned"));
        assert!(lines[1].contains("value=42"));
    }

    #[test]
    fn trace_tuple_arguments() {
        let (ret, lines) = with_captured_logs(|| {
            let mix = trace_fallible("mix", |(value, low, high): (f64, &str, &str)| {
                interpolate(value, low, high, None, None)
            });
            mix((0.5, "#00ff00", "#ff0000"))
        });

        assert_eq!(Ok("#808000".to_string()), ret);
        assert_eq!(2, lines.len());
        assert!(lines[0].contains("called"));
        assert!(lines[0].contains(r##"args=(0.5, "#00ff00", "#ff0000")"##));
        assert!(lines[1].contains("returned"));
        assert!(lines[1].contains("#808000"));
    }

    #[test]
    fn trace_fallible_reraises_errors() {
        let (ret, lines) = with_captured_logs(|| {
            let parse = trace_fallible("parse", parse_color);
            parse("#12345")
        });

        assert_eq!(Err(Error::InvalidColorFormat("#12345".into())), ret);
        assert_eq!(2, lines.len());
        assert!(lines[0].contains("called"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[1].contains("failed"));
        assert!(lines[1].contains("expected '#' followed by exactly 6 hex digits"));
    }

    #[test]
    fn trace_fallible_success() {
        let (ret, lines) = with_captured_logs(|| {
            let parse = trace_fallible("parse", parse_color);
            parse("#00FF00")
        });

        assert_eq!(Ok(Color::lime()), ret);
        assert!(lines[0].contains("called"));
        assert!(lines[1].contains("returned"));
    }

    #[test]
    fn traced_function_can_be_called_repeatedly() {
        let (_, lines) = with_captured_logs(|| {
            let square = trace(String::from("square"), |x: u32| x * x);
            (square(2), square(3))
        });

        let events: Vec<&str> = lines
            .iter()
            .map(|l| {
                if l.contains("called") {
                    "called"
                } else {
                    "returned"
                }
            })
            .collect();
        assert_eq!(vec!["called", "returned", "called", "returned"], events);
    }
}
