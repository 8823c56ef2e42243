use crate::error::BuildError;
use crate::types::channel::ChannelType;
use crate::validate;

/// Options that can be restricted to certain channel kinds.
pub trait HasChannelTypes: Sized {
    fn channel_type_list(&self) -> Option<&[ChannelType]>;

    fn channel_type_list_mut(&mut self) -> &mut Option<Vec<ChannelType>>;

    fn add_channel_type(self, channel_type: ChannelType) -> Result<Self, BuildError> {
        self.add_channel_types([channel_type])
    }

    /// Append channel kinds. Direct message kinds are rejected, and a
    /// rejected batch leaves the list untouched.
    fn add_channel_types(
        mut self,
        channel_types: impl IntoIterator<Item = ChannelType>,
    ) -> Result<Self, BuildError> {
        let batch: Vec<ChannelType> = channel_types.into_iter().collect();

        for channel_type in &batch {
            validate::channel_type(*channel_type)?;
        }
        self.channel_type_list_mut()
            .get_or_insert_with(Vec::new)
            .extend(batch);

        Ok(self)
    }

    fn channel_types(&self) -> &[ChannelType] {
        self.channel_type_list().unwrap_or_default()
    }
}
