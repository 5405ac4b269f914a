use crate::decoder::reversed_time_low_hex;
use crate::detection::looks_like_ec2;
use crate::errors::AppResult;
use clap::Args;

/// Classify a hardware identifier without any network access
#[derive(Args)]
pub struct ClassifyCommand {
    /// Raw identifier, e.g. the contents of /sys/class/dmi/id/product_uuid
    pub identifier: String,

    /// Emit the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<()> {
        let swapped = reversed_time_low_hex(&self.identifier);
        let matches = looks_like_ec2(&self.identifier);

        if self.json {
            let report = serde_json::json!({
                "identifier": self.identifier,
                "swapped_time_low": swapped,
                "looks_like_ec2": matches,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("identifier:       {}", self.identifier);
            match &swapped {
                Some(swapped) => println!("swapped time_low: {}", swapped),
                None => println!("swapped time_low: (not decodable)"),
            }
            println!(
                "verdict:          {}",
                if matches { "looks like EC2" } else { "no match" }
            );
        }

        Ok(())
    }
}
