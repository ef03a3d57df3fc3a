//! Recorder behavior through the public API
//!
//! Every fake appends to one shared call log so read order and
//! short-circuiting are checked across peripherals.

use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::Vector3;
use telemetry_recorder::devices::traits::{Barometer, Gps, GpsFix, Imu, Radio, Storage};
use telemetry_recorder::{
    DeviceError, RecordStep, RecorderConfig, StorePolicy, TelemetryRecorder, TransmitPolicy,
};

type CallLog = Rc<RefCell<Vec<&'static str>>>;

const FULL_SEQUENCE: [&str; 7] = [
    "imu.acceleration",
    "imu.angular_rate",
    "imu.temperature",
    "gps.read",
    "baro.temperature",
    "baro.pressure",
    "baro.altitude",
];

/// Fails the call whose log name matches `fail`
struct Fakes {
    log: CallLog,
    fail: Option<&'static str>,
}

impl Fakes {
    fn call<T>(&self, name: &'static str, value: T) -> Result<T, DeviceError> {
        self.log.borrow_mut().push(name);
        if self.fail == Some(name) {
            Err(DeviceError::NotReady)
        } else {
            Ok(value)
        }
    }
}

struct FakeImu(Rc<Fakes>);
struct FakeGps(Rc<Fakes>);
struct FakeBaro(Rc<Fakes>);
struct FakeStorage(Rc<Fakes>, Vec<u8>);
struct FakeRadio(Rc<Fakes>, Vec<u8>, Vec<u8>);

impl Imu for FakeImu {
    fn read_acceleration(&mut self) -> Result<Vector3<f32>, DeviceError> {
        self.0.call("imu.acceleration", Vector3::new(1.0, 2.0, 3.0))
    }
    fn read_angular_rate(&mut self) -> Result<Vector3<f32>, DeviceError> {
        self.0.call("imu.angular_rate", Vector3::new(0.1, 0.2, 0.3))
    }
    fn read_temperature(&mut self) -> Result<f32, DeviceError> {
        self.0.call("imu.temperature", 25.0)
    }
}

impl Gps for FakeGps {
    fn read(&mut self) -> Result<GpsFix, DeviceError> {
        self.0.call(
            "gps.read",
            GpsFix {
                time: 1000,
                latitude: 37.0,
                longitude: -122.0,
                satellites_used: 8,
                altitude: 10.0,
            },
        )
    }
}

impl Barometer for FakeBaro {
    fn read_temperature(&mut self) -> Result<f32, DeviceError> {
        self.0.call("baro.temperature", 24.5)
    }
    fn read_pressure(&mut self) -> Result<f32, DeviceError> {
        self.0.call("baro.pressure", 101_325.0)
    }
    fn read_altitude(&mut self) -> Result<f32, DeviceError> {
        self.0.call("baro.altitude", 9.8)
    }
}

impl Storage for FakeStorage {
    fn write(&mut self, data: &[u8]) -> Result<(), DeviceError> {
        self.0.call("storage.write", ())?;
        self.1.extend_from_slice(data);
        Ok(())
    }
}

impl Radio for FakeRadio {
    fn read(&mut self) -> Result<&[u8], DeviceError> {
        self.0.call("radio.read", ())?;
        Ok(&self.1)
    }
    fn write(&mut self, data: &[u8]) -> Result<(), DeviceError> {
        self.0.call("radio.write", ())?;
        self.2.extend_from_slice(data);
        Ok(())
    }
}

struct Board {
    log: CallLog,
    imu: FakeImu,
    gps: FakeGps,
    baro: FakeBaro,
    storage: FakeStorage,
    radio: FakeRadio,
}

fn board(fail: Option<&'static str>) -> Board {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let fakes = Rc::new(Fakes {
        log: Rc::clone(&log),
        fail,
    });
    Board {
        log,
        imu: FakeImu(Rc::clone(&fakes)),
        gps: FakeGps(Rc::clone(&fakes)),
        baro: FakeBaro(Rc::clone(&fakes)),
        storage: FakeStorage(Rc::clone(&fakes), Vec::new()),
        radio: FakeRadio(fakes, b"PING\r\n".to_vec(), Vec::new()),
    }
}

fn calls(board: &Board) -> Vec<&'static str> {
    board.log.borrow().clone()
}

#[test]
fn record_reads_sensors_in_order() {
    let mut b = board(None);
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();

    let data = recorder.record().unwrap();
    assert_eq!(data.acceleration, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(data.gps_satellites, 8);
    assert_eq!(data.baro_altitude, 9.8);
    drop(recorder);

    assert_eq!(calls(&b), FULL_SEQUENCE.to_vec());
}

#[test]
fn create_reads_nothing() {
    let mut b = board(None);
    let recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();
    drop(recorder);
    assert!(calls(&b).is_empty());
}

#[test]
fn record_stops_at_first_failure() {
    for (k, name) in FULL_SEQUENCE.iter().enumerate() {
        let mut b = board(Some(*name));
        let mut recorder = TelemetryRecorder::create(
            &mut b.imu,
            &mut b.gps,
            &mut b.baro,
            &mut b.storage,
            &mut b.radio,
        )
        .unwrap();

        let err = recorder.record().unwrap_err();
        assert_eq!(err.step, RecordStep::ALL[k]);
        assert_eq!(err.cause, DeviceError::NotReady);
        drop(recorder);

        assert_eq!(calls(&b), FULL_SEQUENCE[..=k].to_vec(), "failing {}", name);
    }
}

#[test]
fn record_failure_commits_earlier_steps_only() {
    let mut b = board(Some("gps.read"));
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();

    assert!(recorder.record().is_err());
    let data = recorder.snapshot();
    assert_eq!(data.acceleration, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(data.angular_rate, Vector3::new(0.1, 0.2, 0.3));
    assert_eq!(data.imu_temperature, 25.0);
    // Fresh recorder: untouched fields are still zero.
    assert_eq!(data.gps_time, 0);
    assert_eq!(data.gps_latitude, 0.0);
    assert_eq!(data.baro_pressure, 0.0);
}

#[test]
fn receive_returns_radio_bytes() {
    let mut b = board(None);
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();
    assert_eq!(recorder.receive().unwrap(), b"PING\r\n");
    drop(recorder);
    assert_eq!(calls(&b), vec!["radio.read"]);
}

#[test]
fn receive_propagates_radio_failure() {
    let mut b = board(Some("radio.read"));
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();
    assert_eq!(recorder.receive(), Err(DeviceError::NotReady));
}

#[test]
fn transmit_default_reports_success_on_failure() {
    let mut b = board(Some("radio.write"));
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();
    assert_eq!(recorder.transmit("status"), Ok(()));
    drop(recorder);
    assert_eq!(calls(&b), vec!["radio.write"]);
}

#[test]
fn transmit_strict_reports_failure() {
    let mut b = board(Some("radio.write"));
    let config = RecorderConfig::default().with_transmit(TransmitPolicy::Strict);
    let mut recorder = TelemetryRecorder::create_with_config(
        &mut b.imu,
        &mut b.gps,
        &mut b.baro,
        &mut b.storage,
        &mut b.radio,
        config,
    )
    .unwrap();
    assert_eq!(recorder.transmit("status"), Err(DeviceError::NotReady));
}

#[test]
fn transmit_sends_message_bytes() {
    let mut b = board(None);
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();
    recorder.transmit("hello radio").unwrap();
    drop(recorder);
    assert_eq!(b.radio.2, b"hello radio".to_vec());
}

#[test]
fn store_default_is_noop() {
    let mut b = board(Some("storage.write"));
    let mut recorder =
        TelemetryRecorder::create(&mut b.imu, &mut b.gps, &mut b.baro, &mut b.storage, &mut b.radio)
            .unwrap();
    assert_eq!(recorder.store("line"), Ok(()));
    drop(recorder);
    assert!(calls(&b).is_empty());
    assert!(b.storage.1.is_empty());
}

#[test]
fn store_enabled_writes_storage() {
    let mut b = board(None);
    let config = RecorderConfig::default().with_store(StorePolicy::Enabled);
    let mut recorder = TelemetryRecorder::create_with_config(
        &mut b.imu,
        &mut b.gps,
        &mut b.baro,
        &mut b.storage,
        &mut b.radio,
        config,
    )
    .unwrap();
    recorder.store("line\r\n").unwrap();
    drop(recorder);
    assert_eq!(calls(&b), vec!["storage.write"]);
    assert_eq!(b.storage.1, b"line\r\n".to_vec());
}
