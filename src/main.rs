#![no_std]
#![no_main]

use panic_halt as _;

use avr_device::atmega32a::Peripherals;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;

use microwave_firmware::config::FIRMWARE_VERSION;
use microwave_firmware::drivers::{
    ButtonPair, Keypad, Lcd, LcdOption, Loads, Sensors, SerialConsole, OVEN_KEYMAP,
};
use microwave_firmware::hal::{board, Delay, Input, Output, Pin, Port, Prescaler, Timer1, Uart};
use microwave_firmware::logger::{Level, Logger};
use microwave_firmware::oven::{Countdown, Event, OvenController, OvenIo, OvenState};

static COUNTDOWN: Countdown = Countdown::new();

fn on_tick() {
    COUNTDOWN.tick();
}

fn input((port, bit): (Port, u8)) -> Pin<Input> {
    Pin::new(port, bit).into_pull_up_input()
}

fn output((port, bit): (Port, u8)) -> Pin<Output> {
    Pin::new(port, bit).into_output()
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

struct Board {
    buttons: ButtonPair<Pin<Input>, Pin<Input>>,
    keypad: Keypad<Pin<Output>, Pin<Input>, 4, 4>,
    sensors: Sensors<Pin<Input>, Pin<Input>>,
    loads: Loads<Pin<Output>>,
    lcd: Lcd<Pin<Output>, Delay>,
    timer: Timer1,
    delay: Delay,
}

impl OvenIo for Board {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Event, Infallible> {
        self.buttons.poll()
    }

    fn door_open(&mut self) -> Result<bool, Infallible> {
        self.sensors.door_open()
    }

    fn food_present(&mut self) -> Result<bool, Infallible> {
        self.sensors.food_present()
    }

    fn read_key(&mut self) -> nb::Result<u8, Infallible> {
        self.keypad.get_key()
    }

    fn set_loads(&mut self, on: bool) -> Result<(), Infallible> {
        self.loads.set(on)
    }

    fn run_ticks(&mut self, on: bool) {
        if on {
            self.timer.enable_overflow_interrupt(true);
            self.timer.start();
        } else {
            self.timer.stop();
            self.timer.enable_overflow_interrupt(false);
        }
    }

    fn clear_screen(&mut self) -> Result<(), Infallible> {
        self.lcd.set_option(LcdOption::Clear)
    }

    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), Infallible> {
        self.lcd.set_cursor(row, col)?;
        self.lcd.write_string(text)
    }

    fn delay_ms(&mut self, ms: u16) {
        self.delay.delay_ms(ms);
    }
}

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    let level = if cfg!(feature = "debug") {
        Level::Debug
    } else {
        Level::Info
    };
    let mut logger = Logger::new(SerialConsole::new(Uart::new(dp.USART)), level);
    logger.banner(FIRMWARE_VERSION);

    let delay = Delay::new();
    let mut lcd = Lcd::new(
        output(board::LCD_RS),
        output(board::LCD_EN),
        board::LCD_DATA.map(output),
        delay,
    );
    infallible(lcd.init());
    infallible(lcd.set_option(LcdOption::CursorOff));

    // 8 MHz / 256 with the reload value gives one overflow per second
    let mut timer = Timer1::new(dp.TC1, Prescaler::Div256);
    timer.set_overflow_callback(on_tick);

    let mut board = Board {
        buttons: ButtonPair::new(input(board::START_BUTTON), input(board::STOP_BUTTON)),
        keypad: Keypad::new(
            board::KEYPAD_ROWS.map(output),
            board::KEYPAD_COLS.map(input),
            OVEN_KEYMAP,
        ),
        sensors: Sensors::new(input(board::DOOR_SENSOR), input(board::WEIGHT_SENSOR)),
        loads: Loads::new(
            output(board::HEATER),
            output(board::LAMP),
            output(board::MOTOR),
        ),
        lcd,
        timer,
        delay,
    };

    let mut controller = OvenController::new(&COUNTDOWN);
    infallible(controller.power_on(&mut board));

    // SAFETY: the overflow handler and COUNTDOWN are set up above.
    unsafe { avr_device::interrupt::enable() };
    logger.info("ready");

    let mut last_remaining = controller.remaining();
    loop {
        let transition = infallible(controller.poll(&mut board));
        logger.transition(&transition);

        let remaining = controller.remaining();
        if transition.to == OvenState::Running && remaining != last_remaining {
            logger.countdown(remaining);
        }
        last_remaining = remaining;
    }
}
