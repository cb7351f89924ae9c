use crate::console::Console;
use crate::prompt::{self, Answer};
use dpfp_rs::{Backend, DeviceId, Session};
use failure::{Error, Fail};
use std::io::{BufRead, Write};
use tracing::{info, warn};

#[derive(Debug, Fail, PartialEq)]
pub enum RunError {
    #[fail(display = "No device(s) found.")]
    NoDevices,
    #[fail(display = "No device(s) found after {} retries.", _0)]
    RetriesExhausted(u32),
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Upper bound on rescans after an empty scan, `None` asks indefinitely.
    pub max_retries: Option<u32>,
}

/// Opens a session on `backend`, lists the attached readers and describes the first one.
///
/// The session is terminated on every route out of this function once it has been opened.
pub fn run<B, R, W, E>(
    backend: B,
    options: &Options,
    console: &mut Console<R, W, E>,
) -> Result<(), Error>
where
    B: Backend,
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(console.out, "Initializing DPFP SDK...")?;
    let mut session = Session::open(backend)?;
    writeln!(console.out, "DPFPInit returned S_OK")?;
    writeln!(console.out)?;

    writeln!(console.out, "Enumerating devices...")?;
    let devices = discover(&mut session, options, console)?;
    writeln!(console.out)?;

    writeln!(console.out, "Printing found devices UIDs (serial numbers)...")?;
    print_device_ids(&session, &devices, console)?;
    writeln!(console.out)?;

    writeln!(console.out, "First device found will be used...")?;
    let current = devices.first().ok_or(RunError::NoDevices)?;
    writeln!(console.out)?;

    writeln!(console.out, "Printing device info...")?;
    print_device_info(&mut session, current, console)?;
    writeln!(console.out)?;

    writeln!(console.out, "Terminating DPFP SDK...")?;
    drop(session);

    writeln!(console.out, "Program end.")?;

    Ok(())
}

/// Scans until at least one reader shows up or the operator gives up.
fn discover<B, R, W, E>(
    session: &mut Session<B>,
    options: &Options,
    console: &mut Console<R, W, E>,
) -> Result<Vec<DeviceId>, Error>
where
    B: Backend,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut retries = 0;

    loop {
        let devices = session.devices()?;
        if !devices.is_empty() {
            writeln!(console.out, "Device(s) found: {}", devices.len())?;
            return Ok(devices);
        }

        writeln!(console.out, "No DP device found.")?;
        if let Some(max_retries) = options.max_retries {
            if retries >= max_retries {
                return Err(RunError::RetriesExhausted(max_retries).into());
            }
        }

        match prompt::ask_retry(&mut console.input, &mut console.out)? {
            Answer::Yes => {
                retries += 1;
                info!(retries, "scanning for devices again");
            }
            Answer::No => {
                writeln!(console.out, "Exiting.")?;
                return Err(RunError::NoDevices.into());
            }
        }
    }
}

/// One line per reader. A reader whose identifier can't be rendered is skipped.
fn print_device_ids<B, R, W, E>(
    session: &Session<B>,
    devices: &[DeviceId],
    console: &mut Console<R, W, E>,
) -> Result<(), Error>
where
    B: Backend,
    W: Write,
    E: Write,
{
    for (index, id) in devices.iter().enumerate() {
        match session.device_id_text(id) {
            Ok(text) => writeln!(console.out, "Device {}: {}", index + 1, text)?,
            Err(e) => {
                warn!(device = index + 1, error = %e, "skipping device");
                writeln!(console.err, "Failed to convert GUID to string")?;
            }
        }
    }

    Ok(())
}

fn print_device_info<B, R, W, E>(
    session: &mut Session<B>,
    id: &DeviceId,
    console: &mut Console<R, W, E>,
) -> Result<(), Error>
where
    B: Backend,
    W: Write,
    E: Write,
{
    let info = match session.device_info(id) {
        Ok(info) => info,
        Err(e) => {
            writeln!(console.err, "{}", e)?;
            writeln!(console.out, "Device info unavailable.")?;
            return Ok(());
        }
    };

    let out = &mut console.out;
    writeln!(out, "Device serial number: {}", info.get_serial_number())?;
    writeln!(out, "Device product: {}", info.get_product())?;
    writeln!(out, "Device vendor: {}", info.get_vendor())?;
    writeln!(out, "Device language: {}", info.get_language_id())?;
    writeln!(
        out,
        "Device firmware version (Major.Minor.Build): {}",
        info.get_firmware_version()
    )?;
    writeln!(
        out,
        "Device hardware version (Major.Minor.Build): {}",
        info.get_hardware_version()
    )?;
    writeln!(out, "Device identifier type: {}", info.get_uid_type())?;
    writeln!(out, "Device modality: {}", info.get_modality())?;
    writeln!(out, "Device technology: {}", info.get_technology())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpfp_rs::simulated::{Call, Simulated, E_FAIL};
    use dpfp_rs::{DeviceInfo, DpfpError, Modality, Technology, UidType, Version};
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    fn output(console: &TestConsole) -> (String, String) {
        (
            String::from_utf8(console.out.clone()).unwrap(),
            String::from_utf8(console.err.clone()).unwrap(),
        )
    }

    fn reader(serial: &str) -> DeviceInfo {
        DeviceInfo::new(serial, "U.are.U 4500 Fingerprint Reader", "DigitalPersona, Inc.")
            .with_language_id(1033)
            .with_firmware(Version::new(1, 2, 3))
            .with_hardware(Version::new(4, 5, 6))
            .with_uid_type(UidType::Volatile)
            .with_modality(Modality::Area)
            .with_technology(Technology::Optical)
    }

    fn three_readers() -> (Simulated, [DeviceId; 3]) {
        let ids = [
            DeviceId::from_u128(0x1111_1111_2222_3333_4444_5555_5555_5555),
            DeviceId::from_u128(0xAAAA_AAAA_BBBB_CCCC_DDDD_EEEE_EEEE_EEEE),
            DeviceId::from_u128(0x0000_0001_0002_0003_0004_0000_0000_0005),
        ];
        let backend = Simulated::new()
            .device(ids[0], reader("first"))
            .device(ids[1], reader("second"))
            .device(ids[2], reader("third"));

        (backend, ids)
    }

    #[test]
    fn full_report() {
        let (backend, _) = three_readers();
        let mut console = console("");

        run(backend, &Options::default(), &mut console).unwrap();

        let (out, err) = output(&console);
        let expected = "\
Initializing DPFP SDK...
DPFPInit returned S_OK

Enumerating devices...
Device(s) found: 3

Printing found devices UIDs (serial numbers)...
Device 1: {11111111-2222-3333-4444-555555555555}
Device 2: {AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE}
Device 3: {00000001-0002-0003-0004-000000000005}

First device found will be used...

Printing device info...
Device serial number: first
Device product: U.are.U 4500 Fingerprint Reader
Device vendor: DigitalPersona, Inc.
Device language: 1033
Device firmware version (Major.Minor.Build): 1.2.3
Device hardware version (Major.Minor.Build): 4.5.6
Device identifier type: Volatile
Device modality: Area
Device technology: Optical

Terminating DPFP SDK...
Program end.
";
        assert_eq!(out, expected);
        assert_eq!(err, "");
    }

    #[test]
    fn init_comes_first_and_only_once() {
        let (backend, _) = three_readers();
        let journal = backend.journal();

        run(backend, &Options::default(), &mut console("")).unwrap();

        let calls = journal.calls();
        assert_eq!(calls.first(), Some(&Call::Init));
        assert_eq!(journal.count(&Call::Init), 1);
    }

    #[test]
    fn failed_init_stops_everything() {
        let (backend, _) = three_readers();
        let backend = backend.fail_init(E_FAIL);
        let journal = backend.journal();
        let mut console = console("");

        let err = run(backend, &Options::default(), &mut console).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DpfpError>(),
            Some(&DpfpError::InitError(E_FAIL))
        );
        assert_eq!(journal.calls(), vec![Call::Init]);
        assert!(!output(&console).0.contains("DPFPInit returned S_OK"));
    }

    #[test]
    fn declined_retry_never_queries_info() {
        let (backend, _) = three_readers();
        let backend = backend.empty_enumerations(usize::MAX);
        let journal = backend.journal();
        let mut console = console("n\n");

        let err = run(backend, &Options::default(), &mut console).unwrap_err();

        assert_eq!(err.downcast_ref::<RunError>(), Some(&RunError::NoDevices));
        assert_eq!(
            journal.calls(),
            vec![Call::Init, Call::Enumerate, Call::Terminate]
        );

        let (out, _) = output(&console);
        assert!(out.contains("No DP device found.\nRetry search for devices? (y/n): Exiting.\n"));
        assert!(!out.contains("Program end."));
    }

    #[test]
    fn every_yes_rescans() {
        let (backend, ids) = three_readers();
        let backend = backend.empty_enumerations(3);
        let journal = backend.journal();

        run(backend, &Options::default(), &mut console("y\ny\ny\n")).unwrap();

        assert_eq!(journal.count(&Call::Enumerate), 4);
        assert_eq!(journal.count(&Call::DeviceInfo(ids[0])), 1);
    }

    #[test]
    fn invalid_answers_repeat_the_prompt() {
        let (backend, _) = three_readers();
        let backend = backend.empty_enumerations(1);
        let journal = backend.journal();
        let mut console = console("maybe\n?\ny\n");

        run(backend, &Options::default(), &mut console).unwrap();

        let (out, _) = output(&console);
        assert_eq!(out.matches("Retry search for devices? (y/n): ").count(), 3);
        assert_eq!(out.matches("Invalid input. Please enter 'y' or 'n'.").count(), 2);
        assert_eq!(journal.count(&Call::Enumerate), 2);
    }

    #[test]
    fn retries_can_be_bounded() {
        let (backend, _) = three_readers();
        let backend = backend.empty_enumerations(usize::MAX);
        let journal = backend.journal();
        let options = Options {
            max_retries: Some(2),
        };

        let err = run(backend, &options, &mut console("y\ny\ny\ny\n")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<RunError>(),
            Some(&RunError::RetriesExhausted(2))
        );
        assert_eq!(journal.count(&Call::Enumerate), 3);
        assert_eq!(journal.count(&Call::Terminate), 1);
    }

    #[test]
    fn enumeration_failure_is_fatal() {
        let (backend, _) = three_readers();
        let backend = backend.fail_enumeration(E_FAIL);
        let journal = backend.journal();
        let mut console = console("y\n");

        let err = run(backend, &Options::default(), &mut console).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DpfpError>(),
            Some(&DpfpError::EnumerateError(E_FAIL))
        );
        assert_eq!(
            journal.calls(),
            vec![Call::Init, Call::Enumerate, Call::Terminate]
        );
        assert!(!output(&console).0.contains("Retry search"));
    }

    #[test]
    fn ids_are_listed_in_order() {
        let (backend, ids) = three_readers();
        let mut console = console("");

        run(backend, &Options::default(), &mut console).unwrap();

        let (out, _) = output(&console);
        let listed: Vec<&str> = out.lines().filter(|l| l.starts_with("Device ")).take(3).collect();
        let expected: Vec<String> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| format!("Device {}: {}", i + 1, id))
            .collect();
        assert_eq!(listed, expected);
        assert_eq!(out.lines().filter(|l| l.contains(": {")).count(), 3);
    }

    #[test]
    fn unprintable_id_is_skipped() {
        let (backend, ids) = three_readers();
        let backend = backend.fail_id_text(ids[1]);
        let mut console = console("");

        run(backend, &Options::default(), &mut console).unwrap();

        let (out, err) = output(&console);
        assert!(out.contains(&format!("Device 1: {}\n", ids[0])));
        assert!(!out.contains("Device 2:"));
        assert!(out.contains(&format!("Device 3: {}\n", ids[2])));
        assert_eq!(err, "Failed to convert GUID to string\n");
    }

    #[test]
    fn info_is_queried_for_the_first_device_only() {
        let (backend, ids) = three_readers();
        let journal = backend.journal();

        run(backend, &Options::default(), &mut console("")).unwrap();

        let queried: Vec<Call> = journal
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::DeviceInfo(_)))
            .collect();
        assert_eq!(queried, vec![Call::DeviceInfo(ids[0])]);
    }

    #[test]
    fn info_failure_is_reported_and_run_completes() {
        let (backend, ids) = three_readers();
        let backend = backend.fail_device_info(E_FAIL);
        let journal = backend.journal();
        let mut console = console("");

        run(backend, &Options::default(), &mut console).unwrap();

        let (out, err) = output(&console);
        assert!(out.contains("Printing device info...\nDevice info unavailable.\n"));
        assert!(!out.contains("Device serial number"));
        assert!(out.ends_with("Terminating DPFP SDK...\nProgram end.\n"));
        assert_eq!(err, format!("{}\n", DpfpError::DeviceInfoError(E_FAIL)));
        assert_eq!(journal.calls().last(), Some(&Call::Terminate));
        assert_eq!(journal.count(&Call::Terminate), 1);
        assert_eq!(journal.count(&Call::DeviceInfo(ids[0])), 1);
    }

    #[test]
    fn terminate_comes_last() {
        let (backend, _) = three_readers();
        let journal = backend.journal();

        run(backend, &Options::default(), &mut console("")).unwrap();

        let calls = journal.calls();
        assert_eq!(calls.last(), Some(&Call::Terminate));
        assert_eq!(journal.count(&Call::Terminate), 1);
    }
}
