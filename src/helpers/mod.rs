mod load_dotenv;
mod payload;

pub use load_dotenv::load_dotenv;
pub use payload::read_payload;
