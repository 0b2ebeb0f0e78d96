use std::process::ExitCode;

use image_fetcher::Downloader;

const URL: &str = "https://images.pexels.com/photos/32690481/pexels-photo-32690481.jpeg";
const DIRECTORY: &str = "walking-man";

fn main() -> ExitCode {
    let downloader = match Downloader::new(DIRECTORY) {
        Ok(downloader) => downloader,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Directory '{DIRECTORY}' is ready");
    println!("Connecting to: {URL}");
    println!("Downloading image...");

    match downloader.download(URL) {
        Ok(download) => {
            println!(
                "Successfully saved: {} ({} bytes)",
                download.filename, download.size
            );
            println!("Location: {}", download.file.display());

            ExitCode::SUCCESS
        }

        Err(err) => {
            println!("{err}");
            println!("Download failed. Please check the URL and try again");

            ExitCode::FAILURE
        }
    }
}
