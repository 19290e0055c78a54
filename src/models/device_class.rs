use std::fmt;

/// Wire literals accepted for `device_class`, in schema order.
pub const DEVICE_CLASSES: [&str; 8] = [
    "Baicells Nova-233 G2 OD FDD",
    "Baicells Nova-243 OD TDD",
    "Baicells Nova-246 OD FDD",
    "Baicells Neutrino 224 ID FDD",
    "Baicells Nova-436q TDD",
    "Baicells ID TDD/FDD",
    "NuRAN Cavium OC-LTE",
    "FreedomFi One",
];

/// Supported eNodeB device models.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DeviceClass {
    BaicellsNova233G2OdFdd,
    BaicellsNova243OdTdd,
    BaicellsNova246OdFdd,
    BaicellsNeutrino224IdFdd,
    BaicellsNova436qTdd,
    BaicellsIdTddFdd,
    NuranCaviumOcLte,
    FreedomFiOne,
}

impl DeviceClass {
    pub const ALL: [DeviceClass; 8] = [
        Self::BaicellsNova233G2OdFdd,
        Self::BaicellsNova243OdTdd,
        Self::BaicellsNova246OdFdd,
        Self::BaicellsNeutrino224IdFdd,
        Self::BaicellsNova436qTdd,
        Self::BaicellsIdTddFdd,
        Self::NuranCaviumOcLte,
        Self::FreedomFiOne,
    ];

    pub fn as_str(&self) -> &'static str {
        DEVICE_CLASSES[*self as usize]
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = &'static str;
    fn from_str(value: &str) -> Result<Self, &'static str> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or("invalid value")
    }
}

impl std::convert::TryFrom<&str> for DeviceClass {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, &'static str> {
        value.parse()
    }
}

impl From<DeviceClass> for String {
    fn from(value: DeviceClass) -> Self {
        value.as_str().to_string()
    }
}
