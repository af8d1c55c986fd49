use anyhow::Result;
use dexgen::{
    GeneratorOptions,
    UpdateOutcome,
    update_target,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_core::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    println!("Generating Pokemon data...");
    let options = GeneratorOptions::default();
    let store = options.data_store()?;
    match update_target(&store, &options)? {
        UpdateOutcome::Updated => {
            let target = options
                .target
                .file_name()
                .unwrap_or(options.target.as_os_str())
                .to_string_lossy();
            println!("Successfully updated {target} with generated Pokemon data!");
        }
        UpdateOutcome::MarkerNotFound => {
            println!("Could not find Pokemons variable in the file");
        }
    }
    println!("Done!");
    Ok(())
}
