use std::fmt::{Display, Formatter};

/// A message shown to the driver while approaching the railway gate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Alert {
    /// The train is coming, roughly 50 meters remain.
    Slowing,
    /// The train is close, roughly 25 meters remain and braking is engaged.
    Closing,
    /// The vehicle has been halted.
    Stopped,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::Slowing => "Train is coming slow down!\n\n 50 more meters to the railway gate.",
            Alert::Closing => {
                "Train is getting close!\n\n 25 more meters to the railway gate.\n\n Sending signal to the automatic breaking system...."
            }
            Alert::Stopped => "Vehicle stopped!",
        }
    }
}

impl Display for Alert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Alert::Slowing => write!(f, "slowing"),
            Alert::Closing => write!(f, "closing"),
            Alert::Stopped => write!(f, "stopped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::slowing(Alert::Slowing, "slowing")]
    #[case::closing(Alert::Closing, "closing")]
    #[case::stopped(Alert::Stopped, "stopped")]
    fn test_display(#[case] alert: Alert, #[case] expected: &str) {
        assert_eq!(format!("{}", alert), expected);
    }

    #[test]
    fn stopped_message() {
        assert_eq!(Alert::Stopped.message(), "Vehicle stopped!");
    }
}
