//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two
//! implementations for talking to the HT1621 over its 3-wire bus.
//!
//! ## Hardware Requirements
//!
//! The HT1621 uses:
//! - **DATA**: serial data input, sampled on the rising edge of WR
//! - **WR**: write clock
//! - **CS**: chip select (active low), frames every command and write
//!
//! The bus has no read-back path in write-only mode, so it can be driven
//! either by an SPI peripheral (MOSI to DATA, SCK to WR, mode 3) with a
//! GPIO for CS ([`Interface`]), or by three GPIOs ([`BitBangInterface`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ht1621::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! // 100 0000-0011-X: LCD on
//! let _ = interface.select(true);
//! let _ = interface.transmit(&[0x80, 0x60], 100);
//! let _ = interface.select(false);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the HT1621 controller
///
/// The driver only ever needs two primitives: gating the chip-select line
/// and clocking out a frame. Implement this trait on your own type if the
/// bus needs special handling (shared CS, level shifters, DMA).
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Assert (`true`) or release (`false`) chip-select
    ///
    /// CS is active low on the HT1621.
    fn select(&mut self, active: bool) -> InterfaceResult<(), Self::Error>;

    /// Clock out `bytes` MSB first
    ///
    /// # Arguments
    ///
    /// * `bytes` - Frame to send
    /// * `timeout_ms` - Upper bound for the transfer; 0 means unbounded.
    ///   Implementations that cannot observe time may ignore it.
    fn transmit(&mut self, bytes: &[u8], timeout_ms: u32) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Transfer did not finish within its timeout
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Timeout => write!(f, "Timeout writing to display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// SPI bus interface
///
/// Drives DATA/WR from an [`SpiBus`] and CS from a GPIO. The bus must be
/// dedicated to the HT1621 (or otherwise arbitrated by the caller), since
/// CS is toggled by [`DisplayInterface::select`] rather than by an
/// `SpiDevice` transaction.
///
/// `SpiBus` writes are blocking and have no timeout hook, so the timeout
/// passed to [`DisplayInterface::transmit`] is not enforced here.
pub struct Interface<SPI, CS> {
    /// SPI bus for DATA and WR
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
}

impl<SPI, CS> Interface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a new Interface
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Give back the SPI bus and CS pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> DisplayInterface for Interface<SPI, CS>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin,
    CS::Error: Debug,
{
    type Error = InterfaceError<SPI::Error, CS::Error>;

    fn select(&mut self, active: bool) -> InterfaceResult<(), Self::Error> {
        if active {
            self.cs.set_low().map_err(InterfaceError::Pin)
        } else {
            self.cs.set_high().map_err(InterfaceError::Pin)
        }
    }

    fn transmit(&mut self, bytes: &[u8], _timeout_ms: u32) -> InterfaceResult<(), Self::Error> {
        self.spi.write(bytes).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        Ok(())
    }
}

/// Default half period of the WR clock in nanoseconds
///
/// The HT1621 needs WR low and high phases of at least 3.34 µs at 3 V.
pub const DEFAULT_HALF_PERIOD_NS: u32 = 4_000;

/// Bit-banged GPIO interface
///
/// Clocks each bit by pulling WR low, presenting the bit on DATA, and
/// releasing WR high after half a period. The time spent in delays is
/// accounted against the transmit timeout, and the transfer is aborted
/// with [`InterfaceError::Timeout`] once it is exceeded.
///
/// ## Type Parameters
///
/// * `DATA` - Data pin implementing [`OutputPin`]
/// * `WR` - Write clock pin implementing [`OutputPin`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `D` - Delay provider implementing [`DelayNs`]
pub struct BitBangInterface<DATA, WR, CS, D> {
    data: DATA,
    wr: WR,
    cs: CS,
    delay: D,
    /// WR low/high phase length in nanoseconds
    half_period_ns: u32,
}

impl<DATA, WR, CS, D, PinErr> BitBangInterface<DATA, WR, CS, D>
where
    DATA: OutputPin<Error = PinErr>,
    WR: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    D: DelayNs,
{
    /// Create a new bit-banged interface
    pub fn new(data: DATA, wr: WR, cs: CS, delay: D) -> Self {
        Self {
            data,
            wr,
            cs,
            delay,
            half_period_ns: DEFAULT_HALF_PERIOD_NS,
        }
    }

    /// Set the WR half period in nanoseconds
    pub fn set_half_period_ns(&mut self, half_period_ns: u32) -> &mut Self {
        self.half_period_ns = half_period_ns;
        self
    }

    /// Get the WR half period in nanoseconds
    pub fn half_period_ns(&self) -> u32 {
        self.half_period_ns
    }

    /// Give back the pins and the delay provider
    pub fn release(self) -> (DATA, WR, CS, D) {
        (self.data, self.wr, self.cs, self.delay)
    }

    fn write_bit(&mut self, high: bool) -> InterfaceResult<(), PinErr> {
        self.wr.set_low()?;
        if high {
            self.data.set_high()?;
        } else {
            self.data.set_low()?;
        }
        self.delay.delay_ns(self.half_period_ns);
        self.wr.set_high()?;
        self.delay.delay_ns(self.half_period_ns);
        Ok(())
    }
}

impl<DATA, WR, CS, D, PinErr> DisplayInterface for BitBangInterface<DATA, WR, CS, D>
where
    DATA: OutputPin<Error = PinErr>,
    WR: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<Infallible, PinErr>;

    fn select(&mut self, active: bool) -> InterfaceResult<(), Self::Error> {
        if active {
            self.cs.set_low().map_err(InterfaceError::Pin)
        } else {
            self.cs.set_high().map_err(InterfaceError::Pin)
        }
    }

    fn transmit(&mut self, bytes: &[u8], timeout_ms: u32) -> InterfaceResult<(), Self::Error> {
        let budget_ns = u64::from(timeout_ms) * 1_000_000;
        let bit_ns = 2 * u64::from(self.half_period_ns);
        let mut elapsed_ns = 0u64;

        for byte in bytes {
            for bit in (0..8).rev() {
                self.write_bit((byte >> bit) & 1 == 1)
                    .map_err(InterfaceError::Pin)?;
                elapsed_ns += bit_ns;
                if timeout_ms > 0 && elapsed_ns > budget_ns {
                    return Err(InterfaceError::Timeout);
                }
            }
        }
        Ok(())
    }
}
