//! Textured cube geometry for draw instructions

use bytemuck::{Pod, Zeroable};

use crate::voxel::block::BlockFace;

use super::atlas::{FaceAtlasMapper, FaceUv};
use super::scheduler::DrawInstruction;

/// Vertices per cube: 6 faces x 2 triangles
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Position + atlas texture coordinate, laid out for direct GPU upload
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Face emission order within a cube
const FACE_ORDER: [BlockFace; 6] = [
    BlockFace::Back,
    BlockFace::Front,
    BlockFace::Left,
    BlockFace::Right,
    BlockFace::Bottom,
    BlockFace::Top,
];

/// World-space triangles for one instruction, faces in [`FACE_ORDER`]
pub fn cube_vertices(instruction: &DrawInstruction, atlas: &FaceAtlasMapper) -> [CubeVertex; CUBE_VERTEX_COUNT] {
    let p = instruction.position.as_vec3();
    let (x0, y0, z0) = (p.x, p.y, p.z);
    let (x1, y1, z1) = (x0 + 1.0, y0 + 1.0, z0 + 1.0);

    let mut out = [CubeVertex::default(); CUBE_VERTEX_COUNT];
    for (i, face) in FACE_ORDER.into_iter().enumerate() {
        let uv = atlas.uv_for(instruction.block, face);
        let quad = face_quad(face, uv, [x0, y0, z0], [x1, y1, z1]);
        out[i * 6..(i + 1) * 6].copy_from_slice(&quad);
    }
    out
}

/// Two triangles for one face. Side faces map the lower edge to `v0`;
/// left/right mirror `u` across each other, and top/bottom map `z0` to `v1`.
fn face_quad(face: BlockFace, uv: FaceUv, lo: [f32; 3], hi: [f32; 3]) -> [CubeVertex; 6] {
    let [x0, y0, z0] = lo;
    let [x1, y1, z1] = hi;
    let FaceUv { u0, u1, v0, v1 } = uv;
    let v = |position: [f32; 3], uv: [f32; 2]| CubeVertex { position, uv };

    match face {
        BlockFace::Back | BlockFace::Front => {
            let z = if face == BlockFace::Back { z0 } else { z1 };
            [
                v([x0, y0, z], [u0, v0]),
                v([x1, y0, z], [u1, v0]),
                v([x1, y1, z], [u1, v1]),
                v([x1, y1, z], [u1, v1]),
                v([x0, y1, z], [u0, v1]),
                v([x0, y0, z], [u0, v0]),
            ]
        }
        BlockFace::Left => [
            v([x0, y1, z1], [u0, v1]),
            v([x0, y1, z0], [u1, v1]),
            v([x0, y0, z0], [u1, v0]),
            v([x0, y0, z0], [u1, v0]),
            v([x0, y0, z1], [u0, v0]),
            v([x0, y1, z1], [u0, v1]),
        ],
        BlockFace::Right => [
            v([x1, y1, z1], [u1, v1]),
            v([x1, y1, z0], [u0, v1]),
            v([x1, y0, z0], [u0, v0]),
            v([x1, y0, z0], [u0, v0]),
            v([x1, y0, z1], [u1, v0]),
            v([x1, y1, z1], [u1, v1]),
        ],
        BlockFace::Bottom | BlockFace::Top => {
            let y = if face == BlockFace::Bottom { y0 } else { y1 };
            [
                v([x0, y, z0], [u0, v1]),
                v([x1, y, z0], [u1, v1]),
                v([x1, y, z1], [u1, v0]),
                v([x1, y, z1], [u1, v0]),
                v([x0, y, z1], [u0, v0]),
                v([x0, y, z0], [u0, v1]),
            ]
        }
    }
}

/// Concatenated cube geometry for a whole draw list, preserving its order
pub fn build_frame_vertices(instructions: &[DrawInstruction], atlas: &FaceAtlasMapper) -> Vec<CubeVertex> {
    let mut vertices = Vec::with_capacity(instructions.len() * CUBE_VERTEX_COUNT);
    for instruction in instructions {
        vertices.extend_from_slice(&cube_vertices(instruction, atlas));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::voxel::block::BlockType;

    fn dirt_at(x: i32, y: i32, z: i32) -> DrawInstruction {
        DrawInstruction { position: IVec3::new(x, y, z), block: BlockType::Dirt }
    }

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<CubeVertex>(), 20);
        let vertices = [CubeVertex::default(); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 40);
    }

    #[test]
    fn test_cube_spans_unit_cell() {
        let atlas = FaceAtlasMapper::new();
        let vertices = cube_vertices(&dirt_at(3, 1, 7), &atlas);
        for vertex in &vertices {
            let [x, y, z] = vertex.position;
            assert!(x == 3.0 || x == 4.0);
            assert!(y == 1.0 || y == 2.0);
            assert!(z == 7.0 || z == 8.0);
        }
    }

    #[test]
    fn test_each_face_is_planar_and_textured_from_its_cell() {
        let atlas = FaceAtlasMapper::new();
        let vertices = cube_vertices(&dirt_at(0, 0, 0), &atlas);
        for (i, face) in FACE_ORDER.into_iter().enumerate() {
            let quad = &vertices[i * 6..(i + 1) * 6];
            let normal = face.normal();
            let axis = (0..3).find(|&a| normal[a] != 0).unwrap();
            let plane = if normal[axis] > 0 { 1.0 } else { 0.0 };
            assert!(quad.iter().all(|v| v.position[axis] == plane), "{:?}", face);

            let uv = atlas.uv_for(BlockType::Dirt, face);
            for vertex in quad {
                assert!(vertex.uv[0] == uv.u0 || vertex.uv[0] == uv.u1);
                assert!(vertex.uv[1] == uv.v0 || vertex.uv[1] == uv.v1);
            }
        }
    }

    #[test]
    fn test_top_uses_top_cell() {
        let atlas = FaceAtlasMapper::new();
        let vertices = cube_vertices(&dirt_at(0, 0, 0), &atlas);
        let top = &vertices[30..36];
        let uv = atlas.uv_for(BlockType::Dirt, BlockFace::Top);
        assert_eq!(top[0].position, [0.0, 1.0, 0.0]);
        assert_eq!(top[0].uv, [uv.u0, uv.v1]);
        assert_eq!(top[2].uv, [uv.u1, uv.v0]);
    }

    #[test]
    fn test_frame_vertices_follow_draw_order() {
        let atlas = FaceAtlasMapper::new();
        let list = [
            dirt_at(0, 0, 0),
            DrawInstruction { position: IVec3::new(5, 0, 0), block: BlockType::Glass },
        ];
        let vertices = build_frame_vertices(&list, &atlas);
        assert_eq!(vertices.len(), 2 * CUBE_VERTEX_COUNT);
        assert_eq!(vertices[0].position[0], 0.0);
        assert_eq!(vertices[CUBE_VERTEX_COUNT].position[0], 5.0);
    }
}
