use crate::cli::ConsoleAdmin;

pub(crate) async fn run(admin: &ConsoleAdmin) -> Result<(), String> {
    let base_url = admin.api().transport().base_url();

    let status = admin
        .status()
        .await
        .map_err(|error| format!("backend unreachable at {base_url}: {error}"))?;

    println!("status: {}", status.status);
    println!("message: {}", status.message);

    Ok(())
}
