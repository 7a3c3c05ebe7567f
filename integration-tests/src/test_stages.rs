/// Stages modelled on a tiny sensor pipeline, used across integration tests.
pub mod sensor {
    use std::cell::Cell;

    use wand_core::{Process, Start, pipe_operator};

    /// A sensor that returns a fixed sequence of raw readings, one per call,
    /// repeating once the sequence is exhausted.
    pub struct Sensor {
        readings: Vec<u16>,
        cursor: Cell<usize>,
    }

    impl Sensor {
        pub fn new(readings: Vec<u16>) -> Self {
            assert!(!readings.is_empty(), "a sensor needs at least one reading");
            Self {
                readings,
                cursor: Cell::new(0),
            }
        }

        /// A sensor that always returns the same reading.
        pub fn constant(reading: u16) -> Self {
            Self::new(vec![reading])
        }
    }

    impl Start for Sensor {
        type Output = u16;

        fn start(&self) -> u16 {
            let index = self.cursor.get();
            self.cursor.set((index + 1) % self.readings.len());
            self.readings[index]
        }
    }

    /// Converts a raw 12-bit reading into volts for a given reference voltage.
    pub struct ToVolts {
        pub reference: f64,
    }

    impl Process for ToVolts {
        type Input = u16;
        type Output = f64;

        fn process(&self, raw: u16) -> f64 {
            f64::from(raw) / 4095.0 * self.reference
        }
    }

    /// Converts volts into degrees Celsius for a linear temperature probe.
    pub struct ToCelsius {
        pub offset_volts: f64,
        pub volts_per_degree: f64,
    }

    impl Process for ToCelsius {
        type Input = f64;
        type Output = f64;

        fn process(&self, volts: f64) -> f64 {
            (volts - self.offset_volts) / self.volts_per_degree
        }
    }

    pipe_operator! {
        <> Sensor,
        <> ToVolts,
        <> ToCelsius,
    }
}
