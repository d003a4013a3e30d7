use embedded_hal::digital::v2::InputPin;

/// Door switch and weight sensor.
///
/// The door line reads high while the door is open; the weight line
/// reads low while there is food on the plate.
pub struct Sensors<D, W> {
    door: D,
    weight: W,
}

impl<D, W, E> Sensors<D, W>
where
    D: InputPin<Error = E>,
    W: InputPin<Error = E>,
{
    pub fn new(door: D, weight: W) -> Self {
        Self { door, weight }
    }

    pub fn door_open(&self) -> Result<bool, E> {
        self.door.is_high()
    }

    pub fn food_present(&self) -> Result<bool, E> {
        self.weight.is_low()
    }
}
