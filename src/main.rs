use std::process::ExitCode;

fn main() -> ExitCode {
    hap2vcf::cli::run()
}
