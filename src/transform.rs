//! 逐帧变换与GPU uniform打包
//!
//! 把 `kiln_math` 的矩阵转换为可直接上传的 `#[repr(C)]` 数据。

use bytemuck::{Pod, Zeroable};
use kiln_math::{Backend, Element, Matrix, Quaternion, Vector};

/// 模型变换uniform，矩阵按列主序存放
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub model: [f32; 16],
    pub normal: [f32; 16],
    pub tint: [f32; 4],
}

impl TransformUniform {
    /// 由模型矩阵构造；法线矩阵取逆转置，模型矩阵奇异时退化为模型矩阵本身
    pub fn new<B>(model: Matrix<f32, 4, B>, tint: [f32; 4]) -> Self
    where
        B: Backend,
        f32: Element<B, 4>,
    {
        let normal = model
            .try_inverse()
            .map(|inverse| inverse.transpose())
            .unwrap_or(model);
        Self {
            model: model.to_cols_array(),
            normal: normal.to_cols_array(),
            tint,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// 平移分量（第3列的前三个元素）
    pub fn translation(&self) -> [f32; 3] {
        [self.model[12], self.model[13], self.model[14]]
    }
}

/// 绕倾斜轴旋转、上下浮动的演示物体
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    /// 角速度（弧度/秒）
    pub angular_speed: f32,
    /// 浮动幅度
    pub bob_height: f32,
    /// 距相机的距离
    pub distance: f32,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            angular_speed: std::f32::consts::FRAC_PI_2,
            bob_height: 0.5,
            distance: 5.0,
        }
    }
}

impl Spinner {
    /// `seconds` 时刻的模型矩阵：先旋转，再平移到相机前方
    pub fn model<B>(&self, seconds: f32) -> Matrix<f32, 4, B>
    where
        B: Backend,
        f32: Element<B, 4> + Element<B, 3>,
    {
        let angle = self.angular_speed * seconds;
        let axis = Vector::<f32, 3, B>::new(0.0, 1.0, 0.3);
        let rotation = Quaternion::<f32, B>::from_axis_angle(axis, angle).to_matrix4();
        let offset = Vector::<f32, 3, B>::new(0.0, self.bob_height * angle.sin(), -self.distance);
        Matrix::<f32, 4, B>::translation(offset) * rotation
    }

    /// 打包成uniform，颜色随时间循环
    pub fn uniform<B>(&self, seconds: f32) -> TransformUniform
    where
        B: Backend,
        f32: Element<B, 4> + Element<B, 3>,
    {
        let phase = self.angular_speed * seconds;
        let tint = Vector::<f32, 4, B>::new(phase.cos(), phase.sin(), 1.0, 1.0) * 0.5
            + Vector::<f32, 4, B>::splat(0.5);
        TransformUniform::new(self.model::<B>(seconds), tint.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_math::{Fpu, Matrix4, Point3, Simd};

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 36 * 4);
        let uniform = TransformUniform::new(Matrix4::<f32>::identity(), [1.0; 4]);
        assert_eq!(uniform.as_bytes().len(), 144);
        assert_eq!(uniform.normal, Matrix4::<f32>::identity().to_cols_array());

        let floats: &[f32] = bytemuck::cast_slice(uniform.as_bytes());
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[1], 0.0);
    }

    #[test]
    fn test_spinner_backends_agree() {
        let spinner = Spinner::default();
        for seconds in [0.0f32, 0.4, 1.7] {
            let scalar = spinner.model::<Fpu>(seconds);
            let simd = spinner.model::<Simd>(seconds);
            assert_eq!(scalar, simd.to_backend::<Fpu>());
        }
    }

    #[test]
    fn test_spinner_keeps_center_in_front_of_camera() {
        let spinner = Spinner::default();
        let model = spinner.model::<Fpu>(1.0);
        let center = model.transform_point(Point3::origin());
        assert!((center.z() + spinner.distance).abs() < 1.0e-6);
        assert!(center.y().abs() <= spinner.bob_height);

        let uniform = spinner.uniform::<Simd>(1.0);
        let [x, y, z] = uniform.translation();
        assert_eq!(Point3::new(x, y, z), center);
        assert!(uniform.tint.iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_normal_matrix_for_uniform_scale() {
        let model = Matrix4::scale(kiln_math::Vector3::new(2.0f32, 2.0, 2.0));
        let uniform = TransformUniform::new(model, [1.0; 4]);
        assert_eq!(uniform.normal[0], 0.5);
        assert_eq!(uniform.normal[15], 1.0);
    }
}
