//! Application bootstrap.

use std::rc::Rc;

use atlas_core::{RouteTable, TableError};

use crate::app::{App, AppProps};
use crate::config::MOUNT_POINT_ID;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("No browser document available")]
    NoDocument,

    #[error("Mount point '#{0}' not found in document")]
    MissingMountPoint(&'static str),

    #[error("Invalid route table: {0}")]
    RouteTable(#[from] TableError),
}

/// Build the route table and mount the application at [`MOUNT_POINT_ID`].
pub fn mount() -> Result<(), BootError> {
    let table = Rc::new(RouteTable::standard()?);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::NoDocument)?;
    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or(BootError::MissingMountPoint(MOUNT_POINT_ID))?;

    tracing::info!(
        routes = table.entries().len(),
        mount = MOUNT_POINT_ID,
        "Mounting application"
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { table }).render();
    Ok(())
}
