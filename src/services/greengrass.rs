//! Action and resource ARN vocabulary for AWS IoT Greengrass (`greengrass`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "greengrass";

/// IAM actions published for AWS IoT Greengrass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Write. Associate client devices with a core device.
    #[strum(serialize = "greengrass:BatchAssociateClientDeviceWithCoreDevice")]
    BatchAssociateClientDeviceWithCoreDevice,
    /// Write. Disassociate client devices from a core device.
    #[strum(serialize = "greengrass:BatchDisassociateClientDeviceFromCoreDevice")]
    BatchDisassociateClientDeviceFromCoreDevice,
    /// Write. Cancel a deployment.
    #[strum(serialize = "greengrass:CancelDeployment")]
    CancelDeployment,
    /// Write. Create a component version from a recipe or Lambda function.
    #[strum(serialize = "greengrass:CreateComponentVersion")]
    CreateComponentVersion,
    /// Write. Create a continuous deployment for a target.
    #[strum(serialize = "greengrass:CreateDeployment")]
    CreateDeployment,
    /// Write. Delete a component.
    #[strum(serialize = "greengrass:DeleteComponent")]
    DeleteComponent,
    /// Write. Delete a core device.
    #[strum(serialize = "greengrass:DeleteCoreDevice")]
    DeleteCoreDevice,
    /// Read. Retrieve component metadata.
    #[strum(serialize = "greengrass:DescribeComponent")]
    DescribeComponent,
    /// Read. Retrieve a component recipe.
    #[strum(serialize = "greengrass:GetComponent")]
    GetComponent,
    /// Read. Download a component artifact.
    #[strum(serialize = "greengrass:GetComponentVersionArtifact")]
    GetComponentVersionArtifact,
    /// Read. Retrieve connectivity information for a core device.
    #[strum(serialize = "greengrass:GetConnectivityInfo")]
    GetConnectivityInfo,
    /// Read. Retrieve core device metadata.
    #[strum(serialize = "greengrass:GetCoreDevice")]
    GetCoreDevice,
    /// Read. Retrieve a deployment.
    #[strum(serialize = "greengrass:GetDeployment")]
    GetDeployment,
    /// List. List client devices associated with a core device.
    #[strum(serialize = "greengrass:ListClientDevicesAssociatedWithCoreDevice")]
    ListClientDevicesAssociatedWithCoreDevice,
    /// List. List versions of a component.
    #[strum(serialize = "greengrass:ListComponentVersions")]
    ListComponentVersions,
    /// List. List components.
    #[strum(serialize = "greengrass:ListComponents")]
    ListComponents,
    /// List. List core devices.
    #[strum(serialize = "greengrass:ListCoreDevices")]
    ListCoreDevices,
    /// List. List deployments.
    #[strum(serialize = "greengrass:ListDeployments")]
    ListDeployments,
    /// List. List deployments that apply to a core device.
    #[strum(serialize = "greengrass:ListEffectiveDeployments")]
    ListEffectiveDeployments,
    /// List. List components installed on a core device.
    #[strum(serialize = "greengrass:ListInstalledComponents")]
    ListInstalledComponents,
    /// Read. List tags on a resource.
    #[strum(serialize = "greengrass:ListTagsForResource")]
    ListTagsForResource,
    /// Read. Resolve component candidates for a device.
    #[strum(serialize = "greengrass:ResolveComponentCandidates")]
    ResolveComponentCandidates,
    /// Tagging. Add tags to a resource.
    #[strum(serialize = "greengrass:TagResource")]
    TagResource,
    /// Tagging. Remove tags from a resource.
    #[strum(serialize = "greengrass:UntagResource")]
    UntagResource,
    /// Write. Update connectivity information for a core device.
    #[strum(serialize = "greengrass:UpdateConnectivityInfo")]
    UpdateConnectivityInfo,
    /// Matches every Greengrass action.
    #[strum(serialize = "greengrass:*")]
    All,
}

arn_resources! {
    service = "greengrass";
    /// A component, all versions.
    component as Component { partition, region, account, component_name }
        => "arn:{partition}:greengrass:{region}:{account}:components:{component_name}";
    /// One version of a component.
    component_version as ComponentVersion { partition, region, account, component_name, component_version }
        => "arn:{partition}:greengrass:{region}:{account}:components:{component_name}:versions:{component_version}";
    /// Connectivity information for a thing.
    connectivity_info as ConnectivityInfo { partition, region, account, thing_name }
        => "arn:{partition}:greengrass:{region}:{account}:/greengrass/things/{thing_name}/connectivityInfo";
    /// A core device.
    core_device as CoreDevice { partition, region, account, core_device_thing_name }
        => "arn:{partition}:greengrass:{region}:{account}:coreDevices:{core_device_thing_name}";
    /// A deployment.
    deployment as Deployment { partition, region, account, deployment_id }
        => "arn:{partition}:greengrass:{region}:{account}:deployments:{deployment_id}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_wire_values_are_exact() {
        assert_eq!(
            Action::CreateComponentVersion.as_ref(),
            "greengrass:CreateComponentVersion"
        );
    }

    #[test]
    fn component_version_nests_under_component() {
        let arn = ComponentVersion {
            component_name: Some("com.example.Sensor"),
            component_version: Some("1.0.2"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:*:greengrass:*:*:components:com.example.Sensor:versions:1.0.2"
        );
    }
}
