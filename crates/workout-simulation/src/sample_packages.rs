//! Fixed sensor packages used by the report binary

use workout_core::SensorPackage;

/// Reference packages in processing order
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Named presets for demos and tests
pub fn presets() -> Vec<(&'static str, SensorPackage)> {
    vec![
        ("Pool Session", SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0])),
        ("Hour Run", SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])),
        ("Brisk Walk", SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0])),
        ("Short Run", SensorPackage::new("RUN", vec![4200.0, 0.25, 62.0])),
        ("Long Walk", SensorPackage::new("WLK", vec![21000.0, 3.0, 88.0, 172.0])),
        ("Olympic Pool", SensorPackage::new("SWM", vec![1500.0, 1.5, 70.0, 50.0, 36.0])),
    ]
}
