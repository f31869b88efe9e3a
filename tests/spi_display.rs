//! End-to-end checks of the driver over a mocked SPI bus

use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use ht1621::{Builder, Command, Display, Interface};

fn command_transactions(commands: &[Command]) -> Vec<SpiTransaction<u8>> {
    commands
        .iter()
        .flat_map(|command| {
            [
                SpiTransaction::write_vec(command.encode().to_vec()),
                SpiTransaction::flush(),
            ]
        })
        .collect()
}

fn cs_transactions(transfers: usize) -> Vec<PinTransaction> {
    (0..transfers)
        .flat_map(|_| {
            [
                PinTransaction::set(PinState::Low),
                PinTransaction::set(PinState::High),
            ]
        })
        .collect()
}

const INIT: [Command; 6] = [
    Command::BiasCommons(ht1621::Bias::Third, ht1621::Commons::Four),
    Command::ClockSource(ht1621::ClockSource::Rc256k),
    Command::SystemDisable,
    Command::WatchdogDisable,
    Command::SystemEnable,
    Command::LcdOn,
];

#[test]
fn init_and_render_string() {
    let mut spi_expectations = command_transactions(&INIT);
    // 'B' = 0x4F, 'A' = 0x77 shifted one bit right behind the write header
    spi_expectations.push(SpiTransaction::write_vec(vec![
        0xA0, 0x27, 0xBB, 0x80, 0x00, 0x00,
    ]));
    spi_expectations.push(SpiTransaction::flush());

    let spi = SpiMock::new(&spi_expectations);
    let cs = PinMock::new(&cs_transactions(INIT.len() + 1));

    let mut display = Display::new(Interface::new(spi, cs), Builder::new().build());
    display.init(4).unwrap();
    display.render_string("AB", 0).unwrap();

    let (mut spi, mut cs) = display.release().release();
    spi.done();
    cs.done();
}

#[test]
fn power_cycle() {
    let spi_expectations = command_transactions(&[Command::LcdOff, Command::LcdOn]);
    let spi = SpiMock::new(&spi_expectations);
    let cs = PinMock::new(&cs_transactions(2));

    let mut display = Display::new(Interface::new(spi, cs), Builder::new().build());
    display.power_off().unwrap();
    display.power_on().unwrap();

    let (mut spi, mut cs) = display.release().release();
    spi.done();
    cs.done();
}
