use anyhow::Result;

use enodeb_cfg::models::DeviceClass;

pub fn device_classes() -> Result<()> {
    for class in DeviceClass::ALL {
        println!("{class}");
    }
    Ok(())
}
