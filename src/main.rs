#![no_main]
#![no_std]

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::Mutex;
use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use log::{LevelFilter, Log, Metadata, Record};
use panic_halt as _;

#[cfg(feature = "stall-warning")]
use stall_indicator::control::{Airframe, StallDetector};
#[cfg(not(feature = "stall-warning"))]
use stall_indicator::control::BarGraph;
use stall_indicator::{
    hw::{Console, Mmio, RegisterMap},
    Config, ControlLoop,
};

/// Core clock the pacing delay is counted against.
const CORE_CLOCK_HZ: u32 = 100_000_000;

/// Busy-wait delay. Only a lower bound on elapsed time.
struct BusyWait {
    cycles_per_us: u32,
}

impl BusyWait {
    fn new(core_clock_hz: u32) -> Self {
        Self {
            cycles_per_us: core_clock_hz / 1_000_000,
        }
    }
}

impl DelayNs for BusyWait {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = (ns as u64 * self.cycles_per_us as u64) / 1_000;
        cortex_m::asm::delay(cycles.max(1) as u32);
    }

    fn delay_us(&mut self, us: u32) {
        let cycles = us as u64 * self.cycles_per_us as u64;
        cortex_m::asm::delay(cycles.min(u32::MAX as u64) as u32);
    }
}

/// Forwards `log` records to the JTAG UART.
struct ConsoleLogger {
    console: Mutex<RefCell<Option<Console<Mmio>>>>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    console: Mutex::new(RefCell::new(None)),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        cortex_m::interrupt::free(|cs| {
            if let Some(console) = self.console.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(console, "[{}] {}\r\n", record.level(), record.args());
            }
        });
    }

    fn flush(&self) {}
}

fn init_logging(map: RegisterMap) {
    if map.console_base.is_none() {
        return;
    }

    // SAFETY: the logger only touches the console registers, which nothing else uses.
    let console = Console::new(unsafe { Mmio::new(map) });
    cortex_m::interrupt::free(|cs| {
        LOGGER.console.borrow(cs).replace(Some(console));
    });

    if log::set_logger(&LOGGER).is_ok() {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }
}

#[entry]
fn main() -> ! {
    let config = Config::default();
    init_logging(config.map);

    // SAFETY: fixed board addresses, and the control loop is their only user.
    let regs = unsafe { Mmio::new(config.map) };

    #[cfg(not(feature = "stall-warning"))]
    let strategy = BarGraph::new(config.full_scale, config.max_level);
    #[cfg(feature = "stall-warning")]
    let strategy = StallDetector::for_airframe(&Airframe::DEFAULT);

    let app = ControlLoop::new(regs, config, strategy).unwrap();

    let mut delay = BusyWait::new(CORE_CLOCK_HZ);
    app.run_forever(&mut delay)
}
