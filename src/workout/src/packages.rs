use workout_codec::SensorPackage;

/// Sensor packages processed when no sample is given on the command line.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
