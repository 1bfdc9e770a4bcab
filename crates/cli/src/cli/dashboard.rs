use estoque::notifications::{Operation, Subject};

use crate::{
    cli::{ConsoleAdmin, failure},
    render,
};

pub(crate) async fn run(admin: &ConsoleAdmin) -> Result<(), String> {
    let view = admin
        .load_dashboard()
        .await
        .map_err(failure(Operation::Load, Subject::Dashboard))?;

    println!("{}", render::dashboard(&view));

    Ok(())
}
