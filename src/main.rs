//! tiktok-scraper - CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use tiktok_scraper::{
    api::TikTokApi,
    cli::{run_function, Args, Invocation},
    config::{validate_config, Config},
    download::{download_videos, Downloader},
    error::{exit_codes, Error, Result},
    output::{
        init_logging, print_download_summary, print_error, print_info, print_invocation,
        print_records, print_result_count, print_success, print_warning, write_json,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingArgument(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_)
                | Error::Http(_)
                | Error::LookupFailed { .. }
                | Error::MalformedResponse(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Download(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    init_logging(args.debug);

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Validate the call before touching the network
    let invocation = Invocation::from_args(&args, &config)?;

    let download = args.download && invocation.function.is_video_producing();
    if args.download && !download {
        print_warning(&format!(
            "{} does not return videos; ignoring --download",
            invocation.function
        ));
    }

    if !config.options.print_output && args.out_file.is_none() {
        print_invocation(invocation.function.name(), &invocation.identifiers, invocation.n);
    }

    let api = TikTokApi::new(&config.client, config.timeout())?;
    let records = run_function(&api, &invocation).await?;

    // Output
    if config.options.print_output {
        print_records(&records)?;
    }

    if let Some(ref path) = args.out_file {
        write_json(path, &records)?;
        print_success(&format!(
            "Wrote {} records to {}",
            records.len(),
            path.display()
        ));
    }

    if !config.options.print_output && args.out_file.is_none() {
        print_result_count(invocation.function.name(), records.len());
    }

    // Downloads
    if download {
        let downloader = Downloader::new(&config.client, config.timeout())?;
        let show_progress = config.options.show_progress && console::user_attended();

        let summary = download_videos(
            &downloader,
            &records,
            &config.options.download_directory,
            show_progress,
        )
        .await?;
        print_download_summary(&summary);

        if summary.all_failed() {
            return Err(Error::Download(format!(
                "all {} downloads failed",
                summary.failed
            )));
        }
    }

    Ok(())
}
