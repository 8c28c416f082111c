use crate::domain::sample::Sample;

/// The fixed telemetry dataset served when no dataset file is configured.
pub fn builtin_samples() -> Vec<Sample> {
    vec![
        Sample::new("apac", "catalog", 103.67, 99.269, 20250301),
        Sample::new("apac", "support", 206.81, 98.88, 20250302),
        Sample::new("apac", "analytics", 150.4, 97.798, 20250303),
        Sample::new("apac", "checkout", 139.44, 97.891, 20250304),
        Sample::new("apac", "support", 159.57, 97.519, 20250305),
        Sample::new("apac", "checkout", 231.17, 97.365, 20250306),
        Sample::new("apac", "checkout", 155.99, 97.822, 20250307),
        Sample::new("apac", "recommendations", 177.31, 97.575, 20250308),
        Sample::new("apac", "payments", 236.58, 97.27, 20250309),
        Sample::new("apac", "support", 152.06, 98.879, 20250310),
        Sample::new("apac", "analytics", 143.73, 98.738, 20250311),
        Sample::new("apac", "checkout", 100.63, 98.563, 20250312),
        Sample::new("emea", "analytics", 186.77, 97.498, 20250301),
        Sample::new("emea", "support", 223.88, 99.071, 20250302),
        Sample::new("emea", "payments", 225.29, 98.303, 20250303),
        Sample::new("emea", "payments", 126.49, 97.432, 20250304),
        Sample::new("emea", "catalog", 183.37, 99.029, 20250305),
        Sample::new("emea", "support", 169.76, 98.48, 20250306),
        Sample::new("emea", "catalog", 135.66, 97.909, 20250307),
        Sample::new("emea", "support", 125.56, 97.164, 20250308),
        Sample::new("emea", "recommendations", 219.31, 97.868, 20250309),
        Sample::new("emea", "payments", 132.0, 99.2, 20250310),
        Sample::new("emea", "checkout", 122.16, 98.539, 20250311),
        Sample::new("emea", "checkout", 107.86, 98.703, 20250312),
        Sample::new("amer", "recommendations", 162.82, 98.083, 20250301),
        Sample::new("amer", "recommendations", 171.9, 97.271, 20250302),
        Sample::new("amer", "analytics", 154.74, 98.954, 20250303),
        Sample::new("amer", "recommendations", 130.84, 98.581, 20250304),
        Sample::new("amer", "payments", 222.48, 98.746, 20250305),
        Sample::new("amer", "support", 123.92, 99.387, 20250306),
        Sample::new("amer", "payments", 183.61, 99.035, 20250307),
        Sample::new("amer", "analytics", 157.98, 99.103, 20250308),
        Sample::new("amer", "recommendations", 212.52, 98.047, 20250309),
        Sample::new("amer", "payments", 215.67, 99.02, 20250310),
        Sample::new("amer", "recommendations", 141.13, 99.242, 20250311),
        Sample::new("amer", "payments", 134.05, 98.826, 20250312),
    ]
}
