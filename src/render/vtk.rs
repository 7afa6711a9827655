use crate::domain::Grid;
use crate::error::RenderError;
use crate::render::{Renderer, Snapshot};
use std::path::{Path, PathBuf};
use vtkio::model::*;

/// Build a VTK unstructured grid of quads over the sample points,
/// with the grid value attached to each point as `u`.
pub fn grid_to_vtk(grid: &Grid) -> Vtk {
    let rows = grid.rows();
    let cols = grid.cols();

    // Collect the grid points as vertices in mesh
    let mut points = Vec::with_capacity(3 * rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            points.push(grid.xs()[col]);
            points.push(grid.ys()[row]);
            points.push(0.0);
        }
    }

    // Assemble quad elements from grid points
    let n_cells = rows.saturating_sub(1) * cols.saturating_sub(1);
    let mut connectivity = Vec::with_capacity(4 * n_cells);
    let mut offsets = Vec::with_capacity(n_cells);
    let mut cell_types = Vec::with_capacity(n_cells);
    let mut offset = 4;
    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols.saturating_sub(1) {
            let vertices = [
                row * cols + col,
                row * cols + col + 1,
                (row + 1) * cols + col + 1,
                (row + 1) * cols + col,
            ];
            connectivity.extend(vertices.iter().map(|v| *v as u64));
            offsets.push(offset);
            cell_types.push(CellType::Quad);
            offset += 4;
        }
    }

    Vtk {
        version: Version::Auto,
        title: String::new(),
        byte_order: ByteOrder::LittleEndian,
        file_path: None,
        data: DataSet::inline(UnstructuredGridPiece {
            points: IOBuffer::F64(points),
            cells: Cells {
                cell_verts: VertexNumbers::XML {
                    connectivity,
                    offsets,
                },
                types: cell_types,
            },
            data: Attributes {
                point: vec![Attribute::DataArray(DataArray {
                    name: "u".to_string(),
                    elem: ElementType::Scalars {
                        num_comp: 1,
                        lookup_table: None,
                    },
                    data: IOBuffer::F64(grid.buffer().to_vec()),
                })],
                cell: vec![],
            },
        }),
    }
}

pub fn write_vtk<P: AsRef<Path>>(grid: &Grid, path: &P) -> Result<(), RenderError> {
    log::debug!("Writing vtk: {:?}", path.as_ref());
    grid_to_vtk(grid)
        .export(path)
        .map_err(|e| RenderError::Vtk(format!("{:?}", e)))
}

/// Writes the final grid only, format picked from the file extension.
pub struct VtkRenderer {
    path: PathBuf,
}

impl VtkRenderer {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        VtkRenderer { path: path.into() }
    }
}

impl Renderer for VtkRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        if snapshot.is_final() {
            write_vtk(snapshot.grid, &self.path)?;
        }
        Ok(())
    }
}
