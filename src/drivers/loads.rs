use embedded_hal::digital::v2::OutputPin;

/// Heater, lamp and turntable motor, switched together. Active high.
pub struct Loads<P> {
    heater: P,
    lamp: P,
    motor: P,
}

impl<P: OutputPin> Loads<P> {
    pub fn new(heater: P, lamp: P, motor: P) -> Self {
        Self {
            heater,
            lamp,
            motor,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        for pin in [&mut self.heater, &mut self.lamp, &mut self.motor] {
            if on {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    #[test]
    fn all_loads_follow_the_switch() {
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ];
        let mut heater = PinMock::new(&expectations);
        let mut lamp = PinMock::new(&expectations);
        let mut motor = PinMock::new(&expectations);

        let mut loads = Loads::new(heater.clone(), lamp.clone(), motor.clone());
        loads.set(true).unwrap();
        loads.set(false).unwrap();
        loads.set(false).unwrap();

        heater.done();
        lamp.done();
        motor.done();
    }
}
