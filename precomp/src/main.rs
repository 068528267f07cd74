mod application;
mod presentation;

use precomp_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
