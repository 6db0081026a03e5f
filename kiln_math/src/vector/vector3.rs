use super::Vector;
use crate::backend::{Backend, Element};
use crate::scalar::Real;
use crate::tolerance::approx_zero;

impl<T, B> Vector<T, 3, B>
where
    T: Element<B, 3>,
    B: Backend,
{
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.as_slice()[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.as_slice()[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.as_slice()[2]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.as_mut_slice()[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.as_mut_slice()[1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.as_mut_slice()[2] = z;
    }

    /// 丢弃 z 分量
    #[inline]
    pub fn truncate(self) -> Vector<T, 2, B>
    where
        T: Element<B, 2>,
    {
        Vector::from_array([self.x(), self.y()])
    }

    /// 追加 w 分量
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4, B>
    where
        T: Element<B, 4>,
    {
        Vector::from_array([self.x(), self.y(), self.z(), w])
    }

    /// 叉积（右手系）
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }

    /// `a·(b×c)`，即三向量张成的有向体积
    #[inline]
    pub fn scalar_triple(a: Self, b: Self, c: Self) -> T {
        a.dot(b.cross(c))
    }

    /// `(a×b)×c`
    #[inline]
    pub fn vector_triple(a: Self, b: Self, c: Self) -> Self {
        a.cross(b).cross(c)
    }

    #[inline]
    pub fn is_coplanar(a: Self, b: Self, c: Self) -> bool {
        approx_zero(Self::scalar_triple(a, b, c))
    }
}

impl<T, B> Vector<T, 3, B>
where
    T: Element<B, 3> + Real,
    B: Backend,
{
    /// 绕任意轴旋转 `angle` 弧度（Rodrigues 公式），轴在内部归一化
    pub fn rotate_around_axis(self, axis: Self, angle: T) -> Self {
        let k = axis.normalize();
        let (sin, cos) = angle.sin_cos();
        self * cos + k.cross(self) * sin + k * (k.dot(self) * (T::one() - cos))
    }

    #[inline]
    pub fn rotate_around_axis_mut(&mut self, axis: Self, angle: T) {
        *self = self.rotate_around_axis(axis, angle);
    }

    /// 以 `front` 为基准做 Gram-Schmidt 正交化，`up` 与 `right` 原地修改（不归一化）
    pub fn orthogonalize(front: Self, up: &mut Self, right: &mut Self) {
        let front_sqr = front.sqr_magnitude();
        *up -= front * (up.dot(front) / front_sqr);

        let up_sqr = up.sqr_magnitude();
        *right -= front * (right.dot(front) / front_sqr);
        *right -= *up * (right.dot(*up) / up_sqr);
    }

    /// 正交化并把三个向量都归一化
    pub fn ortho_normalize(front: &mut Self, up: &mut Self, right: &mut Self) {
        front.normalize_mut();
        *up -= *front * up.dot(*front);
        up.normalize_mut();
        *right -= *front * right.dot(*front) + *up * right.dot(*up);
        right.normalize_mut();
    }

    /// `(x/z, y/z, 0)`
    #[inline]
    pub fn perspective_divide(self) -> Self {
        let z = self.z();
        Self::new(self.x() / z, self.y() / z, T::zero())
    }

    #[inline]
    pub fn perspective_divide_mut(&mut self) {
        *self = self.perspective_divide();
    }

    /// 长度限制在 `[min, max]`；零向量保持不变
    pub fn clamp_to_magnitude(self, min: T, max: T) -> Self {
        let magnitude = self.magnitude();
        if magnitude < T::TOLERANCE {
            self
        } else if magnitude > max {
            self * (max / magnitude)
        } else if magnitude < min {
            self * (min / magnitude)
        } else {
            self
        }
    }

    #[inline]
    pub fn clamp_to_magnitude_mut(&mut self, min: T, max: T) {
        *self = self.clamp_to_magnitude(min, max);
    }

    /// 保持方向，长度设为 `length`
    #[inline]
    pub fn scale_to_magnitude(self, length: T) -> Self {
        self.normalize() * length
    }

    #[inline]
    pub fn scale_to_magnitude_mut(&mut self, length: T) {
        *self = self.scale_to_magnitude(length);
    }

    /// 缩放到立方体表面：绝对值最大的分量等于 `extent`
    #[inline]
    pub fn bind_to_cube(self, extent: T) -> Self {
        self.bind_to_extent(extent)
    }

    #[inline]
    pub fn bind_to_cube_mut(&mut self, extent: T) {
        *self = self.bind_to_cube(extent);
    }

    #[inline]
    pub fn clamp_to_cube(self, extent: T) -> Self {
        self.clamp_to_extent(extent)
    }

    #[inline]
    pub fn clamp_to_cube_mut(&mut self, extent: T) {
        *self = self.clamp_to_cube(extent);
    }
}
